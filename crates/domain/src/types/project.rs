//! Project identity

use serde::{Deserialize, Serialize};

/// A unit of work that activities and measurements are scoped to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Short project code (e.g. "P5008")
    pub project_code: String,

    /// Optional sub-project suffix code (e.g. "P5008-B")
    pub project_sub_code: Option<String>,

    /// Display name
    pub project_name: String,
}

impl Project {
    /// The code the matcher keys on: the sub-code when present, else the
    /// project code. Unique across the working set handed to the matcher.
    #[must_use]
    pub fn full_code(&self) -> &str {
        self.project_sub_code.as_deref().unwrap_or(&self.project_code)
    }
}

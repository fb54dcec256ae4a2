//! KPI measurement records

use serde::{Deserialize, Serialize};

/// Whether a measurement reports a planned target or an actual accomplishment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputType {
    Planned,
    Actual,
}

/// A single dated field report linked to a project and an activity by name,
/// not by id.
///
/// `quantity` stays raw JSON because the store delivers it as either a
/// number or a string; the aggregator owns the lenient parse (unparseable
/// contributes 0, the record still counts). `record_date` is likewise kept
/// raw; the literal markers "N/A"/"null" occur in real exports and fail
/// closed to no date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Short project code
    pub project_code: String,

    /// Full project code when the row carries a sub-coded variant
    pub project_full_code: Option<String>,

    /// Activity name as entered in the field
    pub activity_name: String,

    /// Optional sub-location label
    pub zone: Option<String>,

    /// Planned target or actual accomplishment
    pub input_type: InputType,

    /// Reported quantity, numeric or string
    #[serde(default)]
    pub quantity: serde_json::Value,

    /// Report date, parsed leniently by the timeline evaluator
    pub record_date: Option<String>,
}

impl MeasurementRecord {
    /// The code the matcher compares against the activity's codes.
    #[must_use]
    pub fn full_code(&self) -> &str {
        self.project_full_code.as_deref().unwrap_or(&self.project_code)
    }
}

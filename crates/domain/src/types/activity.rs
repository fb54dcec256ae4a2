//! BOQ activity line items

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A planned, budgeted unit of work belonging to one project (BOQ line item).
///
/// Created and edited by planning staff outside the engine; read-only here.
/// The tabular store delivers the same logical attribute under several
/// aliased field names; the ingest mapping resolves those before this shape
/// is constructed, so every component downstream assumes the canonical form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Row identifier from the external store
    pub id: String,

    /// Short project code
    pub project_code: String,

    /// Full project code when the row carries a sub-coded variant
    pub project_full_code: Option<String>,

    /// Primary activity name
    pub activity_name: String,

    /// Secondary description, used as the name by some call sites
    pub activity_description: Option<String>,

    /// Optional sub-location label
    pub zone_ref: Option<String>,

    /// Optional secondary sub-location label
    pub zone_number: Option<String>,

    /// Unit of measure for quantities
    pub unit: Option<String>,

    /// Quantity budgeted for the item
    #[serde(default)]
    pub planned_units: f64,

    /// Actual quantity recorded on the activity itself. Fallback only;
    /// KPI-derived actuals are authoritative when present.
    pub actual_units: Option<f64>,

    /// Contract value for the item
    #[serde(default)]
    pub total_value: f64,

    pub planned_start: Option<NaiveDate>,

    pub planned_end: Option<NaiveDate>,

    /// Fallback duration when no end date resolves
    pub calendar_duration_days: Option<i64>,

    /// External schedule-delay signal, not recomputed by the engine
    #[serde(default)]
    pub is_delayed: bool,

    /// External completion signal
    #[serde(default)]
    pub is_completed: bool,
}

impl Activity {
    /// The code the matcher compares records against: the full code when the
    /// row carries one, else the project code.
    #[must_use]
    pub fn full_code(&self) -> &str {
        self.project_full_code.as_deref().unwrap_or(&self.project_code)
    }

    /// Name used for matching: the primary name, falling back to the
    /// description alias when the name is blank.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.activity_name.trim().is_empty() {
            self.activity_description.as_deref().unwrap_or(&self.activity_name)
        } else {
            &self.activity_name
        }
    }

    /// First specified zone label, if any.
    #[must_use]
    pub fn zone_label(&self) -> Option<&str> {
        self.zone_ref
            .as_deref()
            .filter(|z| !z.trim().is_empty())
            .or_else(|| self.zone_number.as_deref().filter(|z| !z.trim().is_empty()))
    }
}

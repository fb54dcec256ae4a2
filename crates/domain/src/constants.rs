//! Domain constants
//!
//! Centralized location for threshold and fallback constants shared by the
//! reconciliation components.

// Status classification thresholds (progress percent, evaluated in order)
pub const COMPLETED_THRESHOLD_PCT: f64 = 100.0;
pub const ON_TRACK_THRESHOLD_PCT: f64 = 80.0;
pub const IN_PROGRESS_THRESHOLD_PCT: f64 = 50.0;

// Timeline fallbacks
/// Planned duration assumed when an activity resolves neither an end date
/// nor a calendar duration
pub const DEFAULT_PLANNED_DURATION_DAYS: i64 = 1;

// Lenient parsing
/// Literal markers the tabular store uses for "no date"
pub const NULL_DATE_MARKERS: [&str; 3] = ["n/a", "null", ""];

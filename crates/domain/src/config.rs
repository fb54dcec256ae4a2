//! Engine configuration structures

use serde::{Deserialize, Serialize};

use crate::constants::{
    COMPLETED_THRESHOLD_PCT, DEFAULT_PLANNED_DURATION_DAYS, IN_PROGRESS_THRESHOLD_PCT,
    ON_TRACK_THRESHOLD_PCT,
};

/// Configuration for progress classification and timeline fallbacks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationConfig {
    /// Progress percent at or above which an activity is Completed (default: 100)
    pub completed_threshold_pct: f64,

    /// Progress percent at or above which an activity is OnTrack (default: 80)
    pub on_track_threshold_pct: f64,

    /// Progress percent at or above which an activity is InProgress (default: 50)
    pub in_progress_threshold_pct: f64,

    /// Planned duration in days assumed when no end date or calendar
    /// duration resolves (default: 1)
    pub default_planned_duration_days: i64,
}

impl Default for ReconciliationConfig {
    fn default() -> Self {
        Self {
            completed_threshold_pct: COMPLETED_THRESHOLD_PCT,
            on_track_threshold_pct: ON_TRACK_THRESHOLD_PCT,
            in_progress_threshold_pct: IN_PROGRESS_THRESHOLD_PCT,
            default_planned_duration_days: DEFAULT_PLANNED_DURATION_DAYS,
        }
    }
}

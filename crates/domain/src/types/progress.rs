//! Derived progress metrics

use serde::{Deserialize, Serialize};

use super::activity::Activity;

/// Per-activity totals reduced from the matched measurement set.
///
/// Recomputed fresh on every invocation; never mutated in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchedAggregate {
    /// Number of contributing Planned records
    pub planned_count: usize,

    /// Number of contributing Actual records
    pub actual_count: usize,

    /// Sum of Planned quantities
    pub total_planned: f64,

    /// Sum of Actual quantities
    pub total_actual: f64,

    /// True iff at least one record matched, independent of the sums
    pub has_data: bool,
}

/// Discrete schedule status derived from progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityStatus {
    NotStarted,
    BehindSchedule,
    InProgress,
    OnTrack,
    Completed,
}

/// Progress and monetary metrics for one activity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressResult {
    /// Unclamped percentage; over-delivery reads above 100. Consuming views
    /// clamp bar widths, not this value.
    pub progress_percent: f64,

    pub status: ActivityStatus,

    /// Contract value per unit (0 when no denominator resolves)
    pub rate: f64,

    /// Monetary value of executed work at `rate`
    pub executed_value: f64,
}

/// One dashboard/export row: an activity with its reduced metrics.
///
/// This is the shape CSV/Excel/PDF exporters flatten into tabular rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciledActivity {
    pub activity: Activity,
    pub aggregate: MatchedAggregate,
    pub progress: ProgressResult,
}

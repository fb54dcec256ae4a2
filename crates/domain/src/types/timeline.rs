//! Timeline spans for the chronological (Gantt) view

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Planned/actual date span for one activity on the timeline.
///
/// The evaluator guarantees chronological consistency:
/// `planned_start <= planned_end` and `duration_days >= 0`. Downstream bar
/// placement relies on that and does no defensive reordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSpan {
    /// Id of the activity the span belongs to
    pub activity_id: String,

    pub planned_start: NaiveDate,

    pub planned_end: NaiveDate,

    /// Earliest dated Actual record, when any matched
    pub actual_start: Option<NaiveDate>,

    /// Latest dated Actual record, when any matched
    pub actual_end: Option<NaiveDate>,

    pub duration_days: i64,

    /// External delay flag, carried through unchanged
    pub is_delayed: bool,

    /// External completion flag, carried through unchanged
    pub is_completed: bool,

    /// Delayed, or the actual end ran past the planned end
    pub is_critical: bool,
}

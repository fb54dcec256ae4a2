//! Progress percentage and status classification

use sitegauge_domain::config::ReconciliationConfig;
use sitegauge_domain::types::{Activity, ActivityStatus, MatchedAggregate, ProgressResult};

use super::valuation::calculate_value;

/// Turns matched totals into a progress percentage, a discrete status, and
/// the monetary rate/value pair.
#[derive(Debug, Clone, Default)]
pub struct ProgressClassifier {
    config: ReconciliationConfig,
}

impl ProgressClassifier {
    #[must_use]
    pub fn new(config: ReconciliationConfig) -> Self {
        Self { config }
    }

    /// Classify one activity against its matched aggregate.
    ///
    /// Progress comes from two sources (the measurement ratio and the plan
    /// ratio) and the higher one wins. Either source alone may
    /// under-report due to partial data entry, so the two are never
    /// averaged. The percentage is reported unclamped (over-delivery reads
    /// above 100); consuming views clamp bar widths, not this value.
    #[must_use]
    pub fn classify(&self, aggregate: &MatchedAggregate, activity: &Activity) -> ProgressResult {
        // KPI-derived actual is authoritative; the activity's own recorded
        // actual is a fallback only.
        let actual_units = if aggregate.total_actual > 0.0 {
            aggregate.total_actual
        } else {
            activity.actual_units.unwrap_or(0.0)
        };

        let progress_from_measurements = if aggregate.total_planned > 0.0 {
            (aggregate.total_actual / aggregate.total_planned) * 100.0
        } else {
            0.0
        };
        let progress_from_plan = if activity.planned_units > 0.0 {
            (actual_units / activity.planned_units) * 100.0
        } else {
            0.0
        };
        let progress_percent = progress_from_measurements.max(progress_from_plan);

        let status = self.status_for(progress_percent, aggregate.actual_count);
        let priced = calculate_value(
            aggregate.total_planned,
            activity.planned_units,
            actual_units,
            activity.total_value,
        );

        ProgressResult {
            progress_percent,
            status,
            rate: priced.rate,
            executed_value: priced.value,
        }
    }

    /// Threshold walk, in order. Zero actual records (not merely zero
    /// actual quantity) force NotStarted regardless of percentage.
    fn status_for(&self, progress: f64, actual_count: usize) -> ActivityStatus {
        if actual_count == 0 {
            return ActivityStatus::NotStarted;
        }
        if progress >= self.config.completed_threshold_pct {
            ActivityStatus::Completed
        } else if progress >= self.config.on_track_threshold_pct {
            ActivityStatus::OnTrack
        } else if progress >= self.config.in_progress_threshold_pct {
            ActivityStatus::InProgress
        } else if progress > 0.0 {
            ActivityStatus::BehindSchedule
        } else {
            ActivityStatus::NotStarted
        }
    }
}

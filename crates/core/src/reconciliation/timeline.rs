//! Timeline range and criticality evaluation

use chrono::{Days, NaiveDate};
use sitegauge_domain::config::ReconciliationConfig;
use sitegauge_domain::types::{Activity, InputType, MeasurementRecord, TimelineSpan};
use sitegauge_domain::utils::dates::parse_date;

/// Computes planned/actual date spans, duration, and the criticality flag
/// for the chronological (Gantt) view.
#[derive(Debug, Clone, Default)]
pub struct TimelineEvaluator {
    config: ReconciliationConfig,
}

impl TimelineEvaluator {
    #[must_use]
    pub fn new(config: ReconciliationConfig) -> Self {
        Self { config }
    }

    /// Build the span for one activity, or `None` when no planned start
    /// resolves; an activity without a planned start cannot be placed on a
    /// timeline and is excluded, not defaulted.
    #[must_use]
    pub fn build_timeline_span(
        &self,
        activity: &Activity,
        matched: &[&MeasurementRecord],
    ) -> Option<TimelineSpan> {
        let planned_start = activity.planned_start?;
        let planned_end = self.resolve_planned_end(activity, planned_start);

        let mut actual_dates: Vec<NaiveDate> = matched
            .iter()
            .filter(|record| record.input_type == InputType::Actual)
            .filter_map(|record| record.record_date.as_deref().and_then(parse_date))
            .collect();
        actual_dates.sort_unstable();
        let actual_start = actual_dates.first().copied();
        let actual_end = actual_dates.last().copied();

        let duration_days = (planned_end - planned_start).num_days();
        let is_critical =
            activity.is_delayed || actual_end.is_some_and(|end| end > planned_end);

        Some(TimelineSpan {
            activity_id: activity.id.clone(),
            planned_start,
            planned_end,
            actual_start,
            actual_end,
            duration_days,
            is_delayed: activity.is_delayed,
            is_completed: activity.is_completed,
            is_critical,
        })
    }

    /// Planned-end fallback chain: the explicit end date when it does not
    /// precede the start, else start + calendar duration, else start + the
    /// configured default. An end before the start is unresolvable dirty
    /// data and runs through the same chain, so the span stays
    /// chronologically consistent.
    fn resolve_planned_end(&self, activity: &Activity, planned_start: NaiveDate) -> NaiveDate {
        if let Some(end) = activity.planned_end {
            if end >= planned_start {
                return end;
            }
        }
        let fallback_days = activity
            .calendar_duration_days
            .filter(|days| *days >= 0)
            .unwrap_or(self.config.default_planned_duration_days)
            .max(0);
        planned_start
            .checked_add_days(Days::new(fallback_days.unsigned_abs()))
            .unwrap_or(planned_start)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_activity(
        planned_start: Option<NaiveDate>,
        planned_end: Option<NaiveDate>,
        calendar_duration_days: Option<i64>,
    ) -> Activity {
        Activity {
            id: "act-1".to_string(),
            project_code: "P5008".to_string(),
            project_full_code: None,
            activity_name: "Excavation Works".to_string(),
            activity_description: None,
            zone_ref: None,
            zone_number: None,
            unit: Some("m3".to_string()),
            planned_units: 100.0,
            actual_units: None,
            total_value: 1000.0,
            planned_start,
            planned_end,
            calendar_duration_days,
            is_delayed: false,
            is_completed: false,
        }
    }

    fn dated_record(input_type: InputType, date: &str) -> MeasurementRecord {
        MeasurementRecord {
            project_code: "P5008".to_string(),
            project_full_code: None,
            activity_name: "Excavation Works".to_string(),
            zone: None,
            input_type,
            quantity: json!(10),
            record_date: Some(date.to_string()),
        }
    }

    #[test]
    fn test_no_planned_start_yields_no_span() {
        // AC: an activity without a planned start is excluded, not defaulted
        let evaluator = TimelineEvaluator::default();
        let activity = make_activity(None, Some(day(2024, 1, 20)), None);

        assert!(evaluator.build_timeline_span(&activity, &[]).is_none());
    }

    #[test]
    fn test_explicit_planned_end() {
        let evaluator = TimelineEvaluator::default();
        let activity =
            make_activity(Some(day(2024, 1, 1)), Some(day(2024, 1, 15)), Some(30));

        let span = evaluator.build_timeline_span(&activity, &[]).unwrap();

        assert_eq!(span.planned_end, day(2024, 1, 15));
        assert_eq!(span.duration_days, 14);
    }

    #[test]
    fn test_calendar_duration_fallback() {
        // AC: start + 10 days when no end date resolves
        let evaluator = TimelineEvaluator::default();
        let activity = make_activity(Some(day(2024, 1, 1)), None, Some(10));

        let span = evaluator.build_timeline_span(&activity, &[]).unwrap();

        assert_eq!(span.planned_start, day(2024, 1, 1));
        assert_eq!(span.planned_end, day(2024, 1, 11));
        assert_eq!(span.duration_days, 10);
    }

    #[test]
    fn test_default_one_day_fallback() {
        let evaluator = TimelineEvaluator::default();
        let activity = make_activity(Some(day(2024, 1, 1)), None, None);

        let span = evaluator.build_timeline_span(&activity, &[]).unwrap();

        assert_eq!(span.planned_end, day(2024, 1, 2));
        assert_eq!(span.duration_days, 1);
    }

    #[test]
    fn test_end_before_start_runs_the_fallback_chain() {
        // AC: the span is guaranteed chronologically consistent
        let evaluator = TimelineEvaluator::default();
        let activity =
            make_activity(Some(day(2024, 3, 1)), Some(day(2024, 2, 1)), Some(5));

        let span = evaluator.build_timeline_span(&activity, &[]).unwrap();

        assert!(span.planned_start <= span.planned_end);
        assert_eq!(span.planned_end, day(2024, 3, 6));
        assert_eq!(span.duration_days, 5);
    }

    #[test]
    fn test_actual_range_from_dated_actual_records() {
        // AC: earliest and latest resolvable Actual dates bound the range
        let evaluator = TimelineEvaluator::default();
        let activity = make_activity(Some(day(2024, 1, 1)), Some(day(2024, 1, 31)), None);
        let records = vec![
            dated_record(InputType::Actual, "2024-01-10"),
            dated_record(InputType::Actual, "2024-01-05"),
            dated_record(InputType::Actual, "2024-01-20"),
        ];
        let matched: Vec<&MeasurementRecord> = records.iter().collect();

        let span = evaluator.build_timeline_span(&activity, &matched).unwrap();

        assert_eq!(span.actual_start, Some(day(2024, 1, 5)));
        assert_eq!(span.actual_end, Some(day(2024, 1, 20)));
    }

    #[test]
    fn test_planned_records_do_not_feed_the_actual_range() {
        let evaluator = TimelineEvaluator::default();
        let activity = make_activity(Some(day(2024, 1, 1)), Some(day(2024, 1, 31)), None);
        let records = vec![dated_record(InputType::Planned, "2024-01-05")];
        let matched: Vec<&MeasurementRecord> = records.iter().collect();

        let span = evaluator.build_timeline_span(&activity, &matched).unwrap();

        assert_eq!(span.actual_start, None);
        assert_eq!(span.actual_end, None);
    }

    #[test]
    fn test_unparseable_record_dates_are_skipped() {
        // AC: a span is omitted rather than guessed: "N/A" is not a date
        let evaluator = TimelineEvaluator::default();
        let activity = make_activity(Some(day(2024, 1, 1)), Some(day(2024, 1, 31)), None);
        let records = vec![
            dated_record(InputType::Actual, "N/A"),
            dated_record(InputType::Actual, "2024-01-12"),
        ];
        let matched: Vec<&MeasurementRecord> = records.iter().collect();

        let span = evaluator.build_timeline_span(&activity, &matched).unwrap();

        assert_eq!(span.actual_start, Some(day(2024, 1, 12)));
        assert_eq!(span.actual_end, Some(day(2024, 1, 12)));
    }

    #[test]
    fn test_critical_when_actual_end_overruns_planned_end() {
        // AC: actual completion trailing the planned end raises the flag
        let evaluator = TimelineEvaluator::default();
        let activity = make_activity(Some(day(2024, 1, 1)), Some(day(2024, 1, 15)), None);
        let records = vec![dated_record(InputType::Actual, "2024-01-20")];
        let matched: Vec<&MeasurementRecord> = records.iter().collect();

        let span = evaluator.build_timeline_span(&activity, &matched).unwrap();

        assert!(span.is_critical);
        assert!(!span.is_delayed);
    }

    #[test]
    fn test_not_critical_when_actual_end_within_plan() {
        let evaluator = TimelineEvaluator::default();
        let activity = make_activity(Some(day(2024, 1, 1)), Some(day(2024, 1, 15)), None);
        let records = vec![dated_record(InputType::Actual, "2024-01-15")];
        let matched: Vec<&MeasurementRecord> = records.iter().collect();

        let span = evaluator.build_timeline_span(&activity, &matched).unwrap();

        assert!(!span.is_critical);
    }

    #[test]
    fn test_delayed_flag_propagates_to_critical() {
        // AC: the delay flag is an external signal, carried not recomputed
        let evaluator = TimelineEvaluator::default();
        let mut activity = make_activity(Some(day(2024, 1, 1)), Some(day(2024, 1, 15)), None);
        activity.is_delayed = true;

        let span = evaluator.build_timeline_span(&activity, &[]).unwrap();

        assert!(span.is_delayed);
        assert!(span.is_critical);
        assert_eq!(span.actual_end, None);
    }

    #[test]
    fn test_completed_flag_carried_through() {
        let evaluator = TimelineEvaluator::default();
        let mut activity = make_activity(Some(day(2024, 1, 1)), Some(day(2024, 1, 15)), None);
        activity.is_completed = true;

        let span = evaluator.build_timeline_span(&activity, &[]).unwrap();

        assert!(span.is_completed);
    }

    #[test]
    fn test_negative_calendar_duration_falls_back_to_default() {
        let evaluator = TimelineEvaluator::default();
        let activity = make_activity(Some(day(2024, 1, 1)), None, Some(-3));

        let span = evaluator.build_timeline_span(&activity, &[]).unwrap();

        assert_eq!(span.planned_end, day(2024, 1, 2));
        assert_eq!(span.duration_days, 1);
    }
}

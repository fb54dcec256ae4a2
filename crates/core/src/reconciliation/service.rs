//! Batched reconciliation service
//!
//! Loads a project's activities and its full measurement set once per
//! screen, then runs the pure pipeline per activity. Matching is a pure
//! scan with no shared accumulator, so per-activity results are independent
//! and order-insensitive; a stale result is simply discarded by the caller.

use std::sync::Arc;

use sitegauge_domain::config::ReconciliationConfig;
use sitegauge_domain::types::{
    Activity, MeasurementRecord, Project, ReconciledActivity, TimelineSpan,
};
use sitegauge_domain::Result;
use tracing::{info, warn};

use super::aggregator::aggregate;
use super::classifier::ProgressClassifier;
use super::ports::{ActivityRepository, MatchPredicate, MeasurementRepository};
use super::timeline::TimelineEvaluator;

/// Reconciliation service for the dashboard's per-project views.
///
/// The only supported calling convention is one batched measurement load
/// shared by every activity's matching call; never one fetch per visible
/// row.
pub struct ReconciliationService {
    activities: Arc<dyn ActivityRepository>,
    measurements: Arc<dyn MeasurementRepository>,
    matcher: Arc<dyn MatchPredicate>,
    classifier: ProgressClassifier,
    timeline: TimelineEvaluator,
}

impl ReconciliationService {
    /// Create a new reconciliation service
    pub fn new(
        activities: Arc<dyn ActivityRepository>,
        measurements: Arc<dyn MeasurementRepository>,
        matcher: Arc<dyn MatchPredicate>,
        config: ReconciliationConfig,
    ) -> Self {
        Self {
            activities,
            measurements,
            matcher,
            classifier: ProgressClassifier::new(config.clone()),
            timeline: TimelineEvaluator::new(config),
        }
    }

    /// Progress rows for every activity of the project.
    pub async fn project_overview(&self, project: &Project) -> Result<Vec<ReconciledActivity>> {
        let (activities, records) = self.load_snapshot(project).await?;

        Ok(activities
            .into_iter()
            .map(|activity| {
                let matched = self.matcher.match_records(&activity, &records);
                let totals = aggregate(&matched);
                let progress = self.classifier.classify(&totals, &activity);
                ReconciledActivity { activity, aggregate: totals, progress }
            })
            .collect())
    }

    /// Timeline spans for the chronological view, sorted by planned start.
    ///
    /// Activities without a resolvable planned start are excluded rather
    /// than plotted at a guessed position.
    pub async fn project_timeline(&self, project: &Project) -> Result<Vec<TimelineSpan>> {
        let (activities, records) = self.load_snapshot(project).await?;

        let mut spans: Vec<TimelineSpan> = activities
            .iter()
            .filter_map(|activity| {
                let matched = self.matcher.match_records(activity, &records);
                self.timeline.build_timeline_span(activity, &matched)
            })
            .collect();
        spans.sort_by_key(|span| span.planned_start);

        Ok(spans)
    }

    /// One batched load of both datasets for the project.
    async fn load_snapshot(
        &self,
        project: &Project,
    ) -> Result<(Vec<Activity>, Vec<MeasurementRecord>)> {
        let full_code = project.full_code();
        let activities = self.activities.activities_for_project(full_code).await?;
        let records = self.measurements.measurements_for_project(full_code).await?;

        info!(
            project = full_code,
            activities = activities.len(),
            records = records.len(),
            "loaded reconciliation snapshot"
        );
        if records.is_empty() {
            warn!(project = full_code, "no measurement records; all activities report no data");
        }

        Ok((activities, records))
    }
}

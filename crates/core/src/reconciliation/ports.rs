//! Port interfaces for activity-measurement reconciliation

use async_trait::async_trait;
use sitegauge_domain::{Activity, MeasurementRecord, Result};

/// Strategy for deciding whether a measurement record belongs to an
/// activity.
///
/// The default [`NameZoneMatcher`](crate::NameZoneMatcher) uses fuzzy name
/// containment plus advisory zone agreement. Alternative strategies (edit
/// distance, an explicit mapping table) can be substituted here without
/// touching the aggregator or classifier downstream.
pub trait MatchPredicate: Send + Sync {
    /// Whether `record` reports against `activity`.
    fn matches(&self, activity: &Activity, record: &MeasurementRecord) -> bool;

    /// All records from `records` that belong to `activity`.
    ///
    /// A pure scan with no shared accumulator: the same slice can be
    /// matched against many activities concurrently, and the input is
    /// never mutated. Provided method; strategies implement
    /// [`MatchPredicate::matches`] only.
    fn match_records<'a>(
        &self,
        activity: &Activity,
        records: &'a [MeasurementRecord],
    ) -> Vec<&'a MeasurementRecord> {
        records.iter().filter(|record| self.matches(activity, record)).collect()
    }
}

/// Read-only access to the BOQ activity catalogue.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Load every activity belonging to the project, in one batch.
    async fn activities_for_project(&self, project_full_code: &str) -> Result<Vec<Activity>>;
}

/// Read-only access to the KPI measurement log.
///
/// Measurements are loaded once per screen and the full set is passed to
/// every activity's matching call. There is deliberately no per-activity
/// fetch method: one remote round-trip per visible row is the legacy
/// anti-pattern this interface removes.
#[async_trait]
pub trait MeasurementRepository: Send + Sync {
    /// Load the project-scoped measurement set, in one batch.
    async fn measurements_for_project(
        &self,
        project_full_code: &str,
    ) -> Result<Vec<MeasurementRecord>>;
}

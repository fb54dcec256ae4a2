//! # SiteGauge Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The activity-measurement reconciliation engine
//! - Port/adapter interfaces (traits) for the external tabular store
//! - The batched reconciliation service
//!
//! ## Architecture Principles
//! - Only depends on `sitegauge-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod ingest;
pub mod reconciliation;

// Re-export specific items to avoid ambiguity
pub use ingest::field_map::{activity_from_row, measurement_from_row, RawRow};
pub use reconciliation::aggregator::aggregate;
pub use reconciliation::classifier::ProgressClassifier;
pub use reconciliation::matcher::NameZoneMatcher;
pub use reconciliation::ports::{ActivityRepository, MatchPredicate, MeasurementRepository};
pub use reconciliation::service::ReconciliationService;
pub use reconciliation::timeline::TimelineEvaluator;
pub use reconciliation::valuation::{calculate_value, RateValue};

//! Default activity-measurement matching predicate
//!
//! The BOQ and the KPI log are maintained independently and share no
//! foreign key, so association is a per-record predicate: project code
//! equality or prefix, bidirectional name containment, and advisory zone
//! agreement. Deliberately permissive; a record may be claimed by more
//! than one activity when names are ambiguous, which the engine accepts
//! rather than resolves (resolving it would need a foreign key the data
//! does not carry).

use sitegauge_domain::types::{Activity, MeasurementRecord};
use sitegauge_domain::utils::text::names_overlap;
use sitegauge_domain::utils::zone::{resolve_zone, zones_agree};

use super::ports::MatchPredicate;

/// Fuzzy name + zone matcher; the engine's default strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameZoneMatcher;

impl NameZoneMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Project check: the record's full code equals one of the activity's
    /// codes or extends it with a sub-code suffix. A record coded more
    /// specifically than its activity still matches.
    fn project_matches(activity: &Activity, record: &MeasurementRecord) -> bool {
        let record_code = record.full_code().trim().to_lowercase();
        if record_code.is_empty() {
            return false;
        }
        [activity.full_code(), activity.project_code.as_str()].iter().any(|code| {
            let code = code.trim().to_lowercase();
            !code.is_empty() && record_code.starts_with(&code)
        })
    }

    /// Zone check over resolved keys. Unspecified zones are advisory, not a
    /// hard filter; two specified zones must agree.
    fn zone_matches(activity: &Activity, record: &MeasurementRecord) -> bool {
        let activity_zone =
            resolve_zone(activity.zone_label().unwrap_or(""), &activity.project_code);
        let record_zone = resolve_zone(record.zone.as_deref().unwrap_or(""), &record.project_code);
        zones_agree(&activity_zone, &record_zone)
    }
}

impl MatchPredicate for NameZoneMatcher {
    fn matches(&self, activity: &Activity, record: &MeasurementRecord) -> bool {
        Self::project_matches(activity, record)
            && names_overlap(activity.display_name(), &record.activity_name)
            && Self::zone_matches(activity, record)
    }
}

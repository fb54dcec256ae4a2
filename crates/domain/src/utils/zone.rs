//! Zone label resolution
//!
//! Zone labels often arrive prefixed with the project code
//! ("P5008-Zone A"). Stripping the prefix yields a key comparable across
//! the BOQ and the KPI log.

use super::text::normalize;

/// Resolve a raw zone label to a comparable key.
///
/// Lower-cases and trims, then strips one leading occurrence of
/// `project_code` followed by a hyphen, a space, or a hyphen with
/// surrounding spaces (case-insensitive). An absent or blank zone resolves
/// to an empty string, which the matcher treats as "zone unspecified".
///
/// # Examples
///
/// ```
/// use sitegauge_domain::utils::zone::resolve_zone;
///
/// assert_eq!(resolve_zone("P5008-Zone A", "P5008"), "zone a");
/// assert_eq!(resolve_zone("p5008 - Zone A", "P5008"), "zone a");
/// assert_eq!(resolve_zone("Zone A", "P5008"), "zone a");
/// assert_eq!(resolve_zone("", "P5008"), "");
/// ```
#[must_use]
pub fn resolve_zone(raw_zone: &str, project_code: &str) -> String {
    let zone = normalize(raw_zone);
    let code = normalize(project_code);
    if code.is_empty() || !zone.starts_with(&code) {
        return zone;
    }

    let rest = &zone[code.len()..];
    let stripped = rest.trim_start_matches([' ', '-']);
    if stripped.len() == rest.len() {
        // The code is not followed by a separator: not a prefixed label
        return zone;
    }
    stripped.to_string()
}

/// Whether two resolved zone keys agree.
///
/// An unspecified zone never blocks a match; two specified zones must be
/// equal or one must contain the other.
#[must_use]
pub fn zones_agree(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return true;
    }
    a.contains(b) || b.contains(a)
}

//! Lenient date parsing
//!
//! Dates from the tabular store arrive as ISO dates, full datetimes, or
//! slash-separated strings, and sometimes as the literal markers "N/A",
//! "null", or an empty cell. Parsing fails closed to `None`: a timeline
//! span is omitted rather than guessed.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::constants::NULL_DATE_MARKERS;

/// Date-only formats accepted, in priority order.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];

/// Datetime formats accepted, truncated to their date component.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse a raw date string, normalizing to a calendar day.
///
/// Datetime inputs are truncated to their date component. Returns `None`
/// for null markers and anything unparseable.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use sitegauge_domain::utils::dates::parse_date;
///
/// assert_eq!(parse_date("2024-01-01"), NaiveDate::from_ymd_opt(2024, 1, 1));
/// assert_eq!(parse_date("2024-01-01T08:30:00Z"), NaiveDate::from_ymd_opt(2024, 1, 1));
/// assert_eq!(parse_date("N/A"), None);
/// assert_eq!(parse_date(""), None);
/// ```
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if NULL_DATE_MARKERS.contains(&trimmed.to_lowercase().as_str()) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }
    DATE_FORMATS.iter().find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Parse an optional raw date field.
#[must_use]
pub fn parse_opt_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(parse_date)
}

//! Lenient numeric parsing for measurement quantities
//!
//! Quantities arrive as JSON numbers or strings, sometimes with grouping
//! commas or stray whitespace. Unparseable values contribute 0; dirty
//! field data is expected, not exceptional.

use serde_json::Value;

/// Parse a quantity value, degrading to 0.0 on anything unparseable.
///
/// Accepts JSON numbers and numeric strings (grouping commas tolerated).
/// Non-finite results also degrade to 0.0 so downstream sums stay finite.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sitegauge_domain::utils::quantity::parse_quantity;
///
/// assert_eq!(parse_quantity(&json!(40.5)), 40.5);
/// assert_eq!(parse_quantity(&json!(" 1,250 ")), 1250.0);
/// assert_eq!(parse_quantity(&json!("pending")), 0.0);
/// assert_eq!(parse_quantity(&json!(null)), 0.0);
/// ```
#[must_use]
pub fn parse_quantity(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(quantity) if quantity.is_finite() => quantity,
        _ => 0.0,
    }
}

//! Unit rate and executed value derivation

use serde::{Deserialize, Serialize};

/// Unit rate and executed monetary value for one activity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateValue {
    /// Contract value per unit
    pub rate: f64,

    /// Monetary value of executed work at `rate`
    pub value: f64,
}

/// Derive the unit rate, then the executed value.
///
/// Two steps rather than a single ratio: the rate stays independently
/// meaningful (per-unit cost display, forecasting remaining value at the
/// same rate). The denominator is the measured planned total, falling back
/// to the activity's budgeted units when no planned measurement matched,
/// so over-delivery against an unmeasured plan still prices. With no
/// denominator at all the rate is 0 and so is the value; never NaN or
/// Infinity.
#[must_use]
pub fn calculate_value(
    total_units: f64,
    planned_units: f64,
    actual_units: f64,
    total_value: f64,
) -> RateValue {
    let rate = if total_units > 0.0 {
        total_value / total_units
    } else if planned_units > 0.0 {
        total_value / planned_units
    } else {
        0.0
    };

    RateValue { rate, value: rate * actual_units }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_and_value_from_measured_plan() {
        // AC: 1000 over 100 measured units, 60 executed
        let result = calculate_value(100.0, 100.0, 60.0, 1000.0);
        assert_eq!(result.rate, 10.0);
        assert_eq!(result.value, 600.0);
    }

    #[test]
    fn test_falls_back_to_budgeted_units() {
        // AC: no Planned measurements matched, value still prices
        let result = calculate_value(0.0, 50.0, 60.0, 1000.0);
        assert_eq!(result.rate, 20.0);
        assert_eq!(result.value, 1200.0);
    }

    #[test]
    fn test_zero_denominators_yield_zero() {
        // AC: never NaN or Infinity
        let result = calculate_value(0.0, 0.0, 60.0, 1000.0);
        assert_eq!(result.rate, 0.0);
        assert_eq!(result.value, 0.0);
        assert!(result.rate.is_finite());
        assert!(result.value.is_finite());
    }

    #[test]
    fn test_all_zero_inputs_stay_zero() {
        let result = calculate_value(0.0, 0.0, 0.0, 0.0);
        assert_eq!(result.rate, 0.0);
        assert_eq!(result.value, 0.0);
    }

    #[test]
    fn test_zero_executed_units_value_is_zero() {
        let result = calculate_value(100.0, 100.0, 0.0, 1000.0);
        assert_eq!(result.rate, 10.0);
        assert_eq!(result.value, 0.0);
    }
}

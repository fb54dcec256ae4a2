//! Quantity aggregation over matched measurement sets

use sitegauge_domain::types::{InputType, MatchedAggregate, MeasurementRecord};
use sitegauge_domain::utils::quantity::parse_quantity;

/// Reduce a matched measurement set into planned/actual totals.
///
/// Partitions records by input type and sums quantities with the lenient
/// parse: an unparseable quantity contributes 0 but the record still counts
/// toward its partition. `has_data` reflects the matched set being
/// non-empty, independent of whether the sums are zero. Recomputed fresh on
/// every invocation; the input is never mutated.
#[must_use]
pub fn aggregate(matched: &[&MeasurementRecord]) -> MatchedAggregate {
    let mut totals = MatchedAggregate { has_data: !matched.is_empty(), ..Default::default() };

    for record in matched {
        let quantity = parse_quantity(&record.quantity);
        match record.input_type {
            InputType::Planned => {
                totals.planned_count += 1;
                totals.total_planned += quantity;
            }
            InputType::Actual => {
                totals.actual_count += 1;
                totals.total_actual += quantity;
            }
        }
    }

    totals
}

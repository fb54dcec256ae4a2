//! Field-alias mapping for the tabular store boundary
//!
//! Each canonical field resolves through an explicit alias table in
//! priority order: the snake_case key first, then the camelCase key, then
//! the human-readable column label. Rows are `serde_json` maps exactly as
//! the store delivers them.

use serde_json::{Map, Value};
use sitegauge_domain::types::{Activity, InputType, MeasurementRecord};
use sitegauge_domain::utils::dates::parse_date;
use sitegauge_domain::utils::quantity::parse_quantity;

/// A raw row as delivered by the tabular store.
pub type RawRow = Map<String, Value>;

// Alias tables, in priority order (canonical key first).
const ID: &[&str] = &["id", "Id", "ID"];
const PROJECT_CODE: &[&str] = &["project_code", "projectCode", "Project Code"];
const PROJECT_FULL_CODE: &[&str] = &[
    "project_full_code",
    "projectFullCode",
    "Project Full Code",
    "project_sub_code",
    "projectSubCode",
    "Project Sub Code",
];
const ACTIVITY_NAME: &[&str] = &["activity_name", "activityName", "Activity Name"];
const ACTIVITY_DESCRIPTION: &[&str] =
    &["activity_description", "activityDescription", "Activity Description"];
const ZONE_REF: &[&str] = &["zone_ref", "zoneRef", "Zone Ref", "Zone Reference"];
const ZONE_NUMBER: &[&str] = &["zone_number", "zoneNumber", "Zone Number", "Zone #"];
const ZONE: &[&str] = &["zone", "Zone"];
const UNIT: &[&str] = &["unit", "Unit"];
const PLANNED_UNITS: &[&str] =
    &["planned_units", "plannedUnits", "Planned Units", "total_units", "Total Units"];
const ACTUAL_UNITS: &[&str] = &["actual_units", "actualUnits", "Actual Units"];
const TOTAL_VALUE: &[&str] = &["total_value", "totalValue", "Total Value"];
const PLANNED_START: &[&str] = &[
    "planned_activity_start_date",
    "plannedActivityStartDate",
    "Planned Activity Start Date",
    "planned_start_date",
    "plannedStartDate",
    "Planned Start Date",
    "start_date",
    "Start Date",
];
const PLANNED_END: &[&str] = &[
    "deadline",
    "Deadline",
    "planned_end_date",
    "plannedEndDate",
    "Planned End Date",
    "end_date",
    "End Date",
];
const CALENDAR_DURATION: &[&str] = &[
    "calendar_duration",
    "calendarDuration",
    "Calendar Duration",
    "duration_days",
    "Duration (Days)",
];
const DELAYED: &[&str] = &["is_delayed", "isDelayed", "Delayed"];
const COMPLETED: &[&str] = &["is_completed", "isCompleted", "Completed", "Activity Completed"];
const INPUT_TYPE: &[&str] = &["input_type", "inputType", "Input Type"];
const QUANTITY: &[&str] = &["quantity", "Quantity", "qty", "Qty"];
const RECORD_DATE: &[&str] = &[
    "activity_date",
    "activityDate",
    "Activity Date",
    "record_date",
    "Record Date",
    "date",
    "Date",
];

/// First alias populated on the row, in priority order. Explicit JSON
/// nulls count as absent and fall through to the next alias.
fn lookup<'a>(row: &'a RawRow, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|key| row.get(*key).filter(|value| !value.is_null()))
}

/// Text field: strings are trimmed, numbers are rendered (codes sometimes
/// arrive numeric). Blank resolves to absent.
fn text(row: &RawRow, aliases: &[&str]) -> Option<String> {
    match lookup(row, aliases)? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numeric field via the lenient quantity parse (unparseable reads 0).
fn number(row: &RawRow, aliases: &[&str]) -> Option<f64> {
    lookup(row, aliases).map(parse_quantity)
}

#[allow(clippy::cast_possible_truncation)]
fn integer(row: &RawRow, aliases: &[&str]) -> Option<i64> {
    number(row, aliases).map(|value| value.round() as i64)
}

fn date(row: &RawRow, aliases: &[&str]) -> Option<chrono::NaiveDate> {
    text(row, aliases).as_deref().and_then(parse_date)
}

/// Boolean field: JSON booleans, "true"/"yes"/"1" strings, non-zero numbers.
fn flag(row: &RawRow, aliases: &[&str]) -> bool {
    match lookup(row, aliases) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => {
            matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "y" | "1")
        }
        Some(Value::Number(n)) => n.as_f64().is_some_and(|value| value != 0.0),
        _ => false,
    }
}

/// Map a raw BOQ row to a canonical activity.
///
/// Every field degrades rather than fails: absent text reads blank, absent
/// numbers read 0, absent dates read `None`; partial rows are expected
/// upstream data, not errors.
#[must_use]
pub fn activity_from_row(row: &RawRow) -> Activity {
    Activity {
        id: text(row, ID).unwrap_or_default(),
        project_code: text(row, PROJECT_CODE).unwrap_or_default(),
        project_full_code: text(row, PROJECT_FULL_CODE),
        activity_name: text(row, ACTIVITY_NAME).unwrap_or_default(),
        activity_description: text(row, ACTIVITY_DESCRIPTION),
        zone_ref: text(row, ZONE_REF),
        zone_number: text(row, ZONE_NUMBER),
        unit: text(row, UNIT),
        planned_units: number(row, PLANNED_UNITS).unwrap_or(0.0),
        actual_units: number(row, ACTUAL_UNITS),
        total_value: number(row, TOTAL_VALUE).unwrap_or(0.0),
        planned_start: date(row, PLANNED_START),
        planned_end: date(row, PLANNED_END),
        calendar_duration_days: integer(row, CALENDAR_DURATION),
        is_delayed: flag(row, DELAYED),
        is_completed: flag(row, COMPLETED),
    }
}

/// Map a raw KPI row to a canonical measurement record.
///
/// Returns `None` when the row declares no recognizable input type; a
/// record that cannot be partitioned into Planned or Actual cannot
/// contribute to any aggregate. `quantity` stays raw: the aggregator owns
/// the lenient parse so a dirty value still counts toward its partition.
#[must_use]
pub fn measurement_from_row(row: &RawRow) -> Option<MeasurementRecord> {
    let input_type = match text(row, INPUT_TYPE)?.to_lowercase().as_str() {
        "planned" => InputType::Planned,
        "actual" => InputType::Actual,
        _ => return None,
    };

    Some(MeasurementRecord {
        project_code: text(row, PROJECT_CODE).unwrap_or_default(),
        project_full_code: text(row, PROJECT_FULL_CODE),
        activity_name: text(row, ACTIVITY_NAME).unwrap_or_default(),
        zone: text(row, ZONE),
        input_type,
        quantity: lookup(row, QUANTITY).cloned().unwrap_or(Value::Null),
        record_date: text(row, RECORD_DATE),
    })
}

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

use super::error::ValidationError;
use super::types::FinancialRecord;

/// Numeric fields that must be present for a record to be scored.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "total_revenue",
    "total_expenses",
    "contributions_and_grants",
    "program_service_revenue",
    "fundraising_expenses",
];

const PROGRAM_EXPENSES_FIELD: &str = "largest_program_expenses";
const SALARIES_FIELD: &str = "top_individual_salaries";
const POLICIES_FIELD: &str = "policies";

/// Validate a raw input record and build a fully populated [`FinancialRecord`].
///
/// Required numeric fields must be present, non-null, non-negative JSON numbers.
/// Optional substructures (`largest_program_expenses`, `top_individual_salaries`,
/// `policies`) default to zero or empty when absent or null. Fields the scorer
/// does not use are ignored.
pub fn validate(raw: &Value) -> Result<FinancialRecord, ValidationError> {
    let object = raw.as_object().ok_or_else(|| ValidationError::Malformed {
        field: "record".to_string(),
        expected: "a JSON object",
    })?;

    let record = FinancialRecord {
        organization_name: organization_name(object)?,
        total_revenue: required_number(object, "total_revenue")?,
        total_expenses: required_number(object, "total_expenses")?,
        contributions_and_grants: required_number(object, "contributions_and_grants")?,
        program_service_revenue: required_number(object, "program_service_revenue")?,
        fundraising_expenses: required_number(object, "fundraising_expenses")?,
        program_expenses: program_expenses_total(object)?,
        top_salary: top_salary(object)?,
        policies: policies(object)?,
    };

    debug!(
        organization = record.display_name(),
        program_expenses = record.program_expenses,
        top_salary = record.top_salary,
        policies = record.policies.len(),
        "validated financial record"
    );

    Ok(record)
}

fn organization_name(object: &Map<String, Value>) -> Result<Option<String>, ValidationError> {
    match object.get("organization_name") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(name)) => Ok(Some(name.clone())),
        Some(_) => Err(ValidationError::Malformed {
            field: "organization_name".to_string(),
            expected: "a string",
        }),
    }
}

fn required_number(object: &Map<String, Value>, field: &str) -> Result<f64, ValidationError> {
    match object.get(field) {
        None => Err(ValidationError::Missing {
            field: field.to_string(),
        }),
        Some(Value::Null) => Err(ValidationError::Null {
            field: field.to_string(),
        }),
        Some(value) => non_negative_number(value, field),
    }
}

fn non_negative_number(value: &Value, field: &str) -> Result<f64, ValidationError> {
    let number = value.as_f64().ok_or_else(|| ValidationError::NotNumeric {
        field: field.to_string(),
        found: json_kind(value),
    })?;
    if number < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value: number,
        });
    }
    Ok(number)
}

/// Look up an optional mapping. Absent and null both mean "not reported".
fn optional_object<'a>(
    object: &'a Map<String, Value>,
    field: &str,
) -> Result<Option<&'a Map<String, Value>>, ValidationError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(ValidationError::Malformed {
            field: field.to_string(),
            expected: "a mapping",
        }),
    }
}

fn program_expenses_total(object: &Map<String, Value>) -> Result<f64, ValidationError> {
    let Some(programs) = optional_object(object, PROGRAM_EXPENSES_FIELD)? else {
        return Ok(0.0);
    };

    let mut total = 0.0_f64;
    for (name, program) in programs {
        let path = format!("{}.{}", PROGRAM_EXPENSES_FIELD, name);
        let entry = program.as_object().ok_or_else(|| ValidationError::Malformed {
            field: path.clone(),
            expected: "a mapping with an 'expenses' amount",
        })?;
        // Entries may carry only grants/revenue; those contribute nothing
        match entry.get("expenses") {
            None | Some(Value::Null) => {}
            Some(value) => total += non_negative_number(value, &format!("{}.expenses", path))?,
        }
    }
    if !total.is_finite() {
        return Err(ValidationError::Malformed {
            field: PROGRAM_EXPENSES_FIELD.to_string(),
            expected: "expenses summing to a finite amount",
        });
    }
    Ok(total)
}

fn top_salary(object: &Map<String, Value>) -> Result<f64, ValidationError> {
    let Some(salaries) = optional_object(object, SALARIES_FIELD)? else {
        return Ok(0.0);
    };

    let mut top = 0.0_f64;
    for (role, salary) in salaries {
        if salary.is_null() {
            continue;
        }
        let amount = non_negative_number(salary, &format!("{}.{}", SALARIES_FIELD, role))?;
        top = top.max(amount);
    }
    Ok(top)
}

fn policies(object: &Map<String, Value>) -> Result<BTreeMap<String, bool>, ValidationError> {
    let Some(entries) = optional_object(object, POLICIES_FIELD)? else {
        return Ok(BTreeMap::new());
    };

    entries
        .iter()
        .map(|(name, flag)| {
            let implemented = match flag {
                Value::Bool(b) => *b,
                // Unknown status counts against transparency
                Value::Null => false,
                _ => {
                    return Err(ValidationError::Malformed {
                        field: format!("{}.{}", POLICIES_FIELD, name),
                        expected: "a boolean",
                    })
                }
            };
            Ok((name.clone(), implemented))
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

use thiserror::Error;

/// Why an input record could not be turned into a [`FinancialRecord`](super::FinancialRecord).
///
/// Every variant carries the path of the offending field, e.g. `total_expenses`
/// or `top_individual_salaries.ceo`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required field '{field}'")]
    Missing { field: String },

    #[error("required field '{field}' is null")]
    Null { field: String },

    #[error("field '{field}' must be a number, found {found}")]
    NotNumeric { field: String, found: &'static str },

    #[error("field '{field}' must be non-negative, found {value}")]
    Negative { field: String, value: f64 },

    #[error("field '{field}' is malformed: expected {expected}")]
    Malformed {
        field: String,
        expected: &'static str,
    },
}

impl ValidationError {
    /// Path of the field that failed validation
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Missing { field }
            | ValidationError::Null { field }
            | ValidationError::NotNumeric { field, .. }
            | ValidationError::Negative { field, .. }
            | ValidationError::Malformed { field, .. } => field,
        }
    }
}

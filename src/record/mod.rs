pub mod error;
pub mod types;
pub mod validation;

pub use error::ValidationError;
pub use types::FinancialRecord;
pub use validation::{validate, REQUIRED_FIELDS};

use thiserror::Error;

/// Rule violations reported by the validator.
///
/// Every variant names the offending field (`name`, `price`, `stock`,
/// `categories`, `categories[i].name`, ...) so callers can point at it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: String },
    #[error("{field} must be at most {max} characters, got {actual}")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },
    #[error("{field} is out of range: {reason}")]
    OutOfRange { field: String, reason: String },
    #[error("{field} allows at most {max} entries, got {actual}")]
    TooMany {
        field: String,
        max: usize,
        actual: usize,
    },
    #[error("Duplicate category: {name}")]
    DuplicateCategory { name: String },
}

impl ValidationError {
    /// Field the rule was checked against. Duplicates are reported on `categories`.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::TooMany { field, .. } => field,
            ValidationError::DuplicateCategory { .. } => "categories",
        }
    }
}

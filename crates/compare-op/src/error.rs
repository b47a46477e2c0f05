use thiserror::Error;

use crate::column::ValueKind;

/// Errors produced while resolving or applying a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// A column was compared against a value of another type.
    #[error("cannot compare {column} column against {value} value")]
    TypeMismatch { column: ValueKind, value: ValueKind },

    /// Text did not name a known operator.
    #[error("unknown comparison operator: {0:?}")]
    UnknownOperator(String),
}

/// A specialized Result type for comparison operations
pub type Result<T> = std::result::Result<T, CompareError>;

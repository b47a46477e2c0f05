use compare_op::CompareError;
use thiserror::Error;

/// Errors that can occur when working with an index set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexSetError {
    /// Read of an index outside `0..capacity`
    #[error("index {index} is out of range for capacity {capacity}")]
    OutOfRange { index: usize, capacity: usize },

    /// The comparison could not be applied to the supplied values
    #[error("Comparison error: {0}")]
    Compare(#[from] CompareError),
}

/// A specialized Result type for index set operations
pub type Result<T> = std::result::Result<T, IndexSetError>;

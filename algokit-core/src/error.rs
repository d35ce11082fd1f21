//! Error types for the contest structures

/// Errors raised for incorrect use of a structure
///
/// These signal programmer mistakes (bad indices, operating on an empty
/// queue), not expected query outcomes. Expected "no result" cases are
/// reported through `Option` values instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgoError {
    /// Index outside `[0, size)`
    IndexOutOfBounds { index: usize, size: usize },
    /// Range query with `left > right` or a bound outside `[0, size)`
    InvalidRange {
        left: usize,
        right: usize,
        size: usize,
    },
    /// Pop on an empty priority queue
    EmptyQueue,
    /// Key or node that was never inserted
    KeyNotFound,
}

impl core::fmt::Display for AlgoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AlgoError::IndexOutOfBounds { index, size } => {
                write!(f, "index {index} out of bounds for size {size}")
            }
            AlgoError::InvalidRange { left, right, size } => {
                write!(f, "invalid range [{left}, {right}] for size {size}")
            }
            AlgoError::EmptyQueue => write!(f, "pop from an empty priority queue"),
            AlgoError::KeyNotFound => write!(f, "key not found"),
        }
    }
}

/// Result type for fallible structure operations
pub type Result<T> = core::result::Result<T, AlgoError>;

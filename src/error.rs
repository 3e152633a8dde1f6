//! Error types for list and node operations.

/// Result type for list operations.
pub type Result<T> = std::result::Result<T, ListError>;

/// Errors that can occur during list and node operations.
///
/// All variants are recoverable. An operation that returns an error has not
/// modified the list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// An absent value was supplied where a concrete value is required.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The index falls outside the valid range for the operation.
    #[error("Index out of bounds: index={index}, len={len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// No qualifying element exists.
    #[error("No such element: {0}")]
    NoSuchElement(&'static str),
}

impl ListError {
    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }
}

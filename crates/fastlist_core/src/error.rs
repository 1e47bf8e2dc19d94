use thiserror::Error;

/// Errors surfaced by `DynamicArray` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("insertion index {index} out of bounds for length {len}")]
    InsertOutOfBounds { index: usize, len: usize },

    #[error("range starting at {index} with count {count} out of bounds for length {len}")]
    RangeOutOfBounds {
        index: usize,
        count: usize,
        len: usize,
    },

    /// The requested capacity does not fit in the address space.
    #[error("capacity of {requested} elements exceeds the maximum allocation size")]
    CapacityOverflow { requested: usize },
}

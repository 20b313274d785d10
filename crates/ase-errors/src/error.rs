//! Error types for [`ErrorCollection`](crate::ErrorCollection) access.

use thiserror::Error;

/// Misuse of an [`ErrorCollection`](crate::ErrorCollection) by its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("index {index} is out of range for a collection of {count} errors")]
    IndexOutOfRange { index: usize, count: usize },

    #[error(
        "destination of capacity {capacity} cannot hold {required} errors starting at offset {offset}"
    )]
    InsufficientCapacity {
        offset: usize,
        required: usize,
        capacity: usize,
    },
}

/// A type alias for `Result<T, CollectionError>`.
pub type Result<T> = std::result::Result<T, CollectionError>;

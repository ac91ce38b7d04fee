use thiserror::Error;

/// Result alias for fallible collection operations.
pub type Result<T> = core::result::Result<T, CollectionError>;

/// Failures a collection operation can report.
///
/// Every failure is detected before any link or buffer slot is rewritten,
/// so the collection is unchanged whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// A remove, pop, or peek was attempted on an empty collection.
    #[error("collection is empty")]
    EmptyCollection,

    /// A removal by value exhausted the chain without a match.
    #[error("value not found in collection")]
    NotFound,

    /// A positional insert fell outside `0..=len`.
    #[error("position {pos} is out of range for length {len}")]
    OutOfRange { pos: usize, len: usize },
}

//! Error types for the store contract.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No item exists at the requested key.
    #[error("item not found")]
    NotFound,

    /// A child already exists at the key being created.
    #[error("item already exists: {0:?}")]
    AlreadyExists(Vec<u8>),

    /// A lock guarding the store was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,

    /// Backend failure (I/O, corruption, ...), carried verbatim.
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Returns true for the not-found sentinel.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

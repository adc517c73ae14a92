//! Error types for the schema layer.

use chrono::{DateTime, Utc};
use rootstocks_store::StoreError;
use thiserror::Error;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur in schema operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Error returned by the underlying store, passed through unchanged.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Structured value could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A composite key was not the expected length.
    #[error("wrong key length: expected {expected} bytes, got {actual}")]
    WrongKeyLength { expected: usize, actual: usize },

    /// A packed value was shorter than its layout.
    #[error("wrong value length: expected at least {expected} bytes, got {actual}")]
    WrongValueLength { expected: usize, actual: usize },

    /// A key carried a different tag than the record kind being read.
    #[error("unexpected key tag: expected {expected}, got {actual}")]
    UnexpectedTag { expected: u8, actual: u8 },

    /// A key tag that names no record kind.
    #[error("unknown key tag: {0}")]
    UnknownTag(u8),

    /// Key seconds outside the range chrono can represent.
    #[error("timestamp out of range: {0}")]
    InvalidTimestamp(i64),

    /// A note is already stored at this second.
    #[error("note already exists at {0}")]
    NoteAlreadyExists(DateTime<Utc>),

    /// Caller passed an unusable argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A range delete failed part way. Items before `key` stay deleted.
    #[error("range delete stopped after {deleted} deletions at key {key:?}: {source}")]
    DeleteAborted {
        deleted: usize,
        key: Vec<u8>,
        #[source]
        source: StoreError,
    },
}

impl SchemaError {
    /// Returns true when the store reported the not-found sentinel.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(StoreError::NotFound))
    }
}

impl From<rootstocks_types::Error> for SchemaError {
    fn from(err: rootstocks_types::Error) -> Self {
        match err {
            rootstocks_types::Error::UnknownDuration(tag) => Self::UnknownTag(tag),
        }
    }
}

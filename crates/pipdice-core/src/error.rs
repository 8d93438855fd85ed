//! Error types for the persistence boundary.
//!
//! Only stores return these. The engine, history and widget recover from
//! every failure locally and never hand an error back to their callers.

use thiserror::Error;

/// Result type for key-value store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors a key-value store can report.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("store i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded for storage.
    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The store refused the write (quota, disabled storage, test switch).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

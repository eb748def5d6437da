//! Error types for persistence operations.

use thiserror::Error;

/// Errors that can occur while saving or restoring the document.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The document could not be serialized or deserialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The underlying blob store rejected the operation
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

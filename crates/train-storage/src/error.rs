//! Storage error types.

use thiserror::Error;
use train_models::ClipRole;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{} clip not found for this session", .0)]
    MissingClip(ClipRole),

    #[error("Invalid session: {0}")]
    InvalidSession(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    pub fn invalid_session(msg: impl Into<String>) -> Self {
        Self::InvalidSession(msg.into())
    }

    /// Whether the error is a missing clip rather than a storage failure.
    pub fn is_missing(&self) -> bool {
        matches!(self, StorageError::MissingClip(_))
    }
}

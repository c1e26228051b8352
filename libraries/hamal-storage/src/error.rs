/// Storage-specific errors
use hamal_core::HamalError;
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Uniqueness constraint violated
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Attempted to write a status the lifecycle never produces
    #[error("Invalid status transition to {0}")]
    InvalidStatus(String),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// A stored value could not be mapped back to a domain type
    #[error("Corrupt row: {0}")]
    CorruptRow(String),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for HamalError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Conflict(msg) => HamalError::Conflict(msg),
            StorageError::Database(e) => HamalError::Database(e.to_string()),
            other => HamalError::storage(other.to_string()),
        }
    }
}

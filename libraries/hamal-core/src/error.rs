/// Core error types for HamalNews
use thiserror::Error;

/// Result type alias using `HamalError`
pub type Result<T> = std::result::Result<T, HamalError>;

/// Core error type for HamalNews
#[derive(Error, Debug)]
pub enum HamalError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity, e.g. `Report`
        entity: String,
        /// The id that was looked up
        id: String,
    },

    /// Uniqueness violation (e.g. a username that is already taken)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A required field was missing or blank
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl HamalError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

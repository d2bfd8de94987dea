//! Error types for the todo store.

use crate::types::TodoId;
use thiserror::Error;

/// Main error type for store operations.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Todo text is required")]
    Validation,

    #[error("Todo not found")]
    NotFound(TodoId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Corrupted todo file: {0}")]
    Corruption(String),

    #[error("Todo id space exhausted at {0}")]
    IdsExhausted(TodoId),
}

impl From<serde_json::Error> for TodoError {
    fn from(e: serde_json::Error) -> Self {
        TodoError::Serialization(e.to_string())
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, TodoError>;

//! Error types for task store operations.

use std::fmt;

use thiserror::Error;

use crate::id::TaskId;

/// Input field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Task title.
    Title,
    /// Task body text.
    Text,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Text => f.write_str("text"),
        }
    }
}

/// Errors that can occur during `TaskStore` operations.
///
/// All variants are recoverable; callers surface them to the user and
/// carry on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required field was empty.
    #[error("{field} must not be empty")]
    Validation {
        /// The offending field.
        field: Field,
    },

    /// The referenced task is not in the store.
    #[error("Task not found: {0}")]
    NotFound(TaskId),

    /// A deletion was resolved without being requested first.
    #[error("No deletion is awaiting confirmation")]
    NoPendingDeletion,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

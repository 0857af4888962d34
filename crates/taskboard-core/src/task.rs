use serde::{Deserialize, Serialize};

use crate::error::{Field, Result, StoreError};
use crate::id::TaskId;

/// A single user-managed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier assigned by the store; never changes.
    pub id: TaskId,
    /// Short heading.
    pub title: String,
    /// Body text.
    pub text: String,
}

/// Reject empty titles before empty texts, matching the form's field order.
pub(crate) fn validate(title: &str, text: &str) -> Result<()> {
    if title.is_empty() {
        return Err(StoreError::Validation { field: Field::Title });
    }
    if text.is_empty() {
        return Err(StoreError::Validation { field: Field::Text });
    }
    Ok(())
}

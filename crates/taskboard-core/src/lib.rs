//! Domain types and the edit-mode state machine for taskboard.
//!
//! [`TaskStore`] is the single owner of task state. It never touches a view;
//! every mutation queues a [`StoreChange`] for the caller to project.

/// Error types.
pub mod error;
/// Identifier types and generators.
pub mod id;
/// Task store and edit-mode state machine.
pub mod store;
/// Task record.
pub mod task;

pub use error::{Field, StoreError};
pub use id::{AlphanumericIds, IdGenerator, TaskId};
pub use store::{Confirmation, Deletion, DeletionRequest, EditState, StoreChange, TaskStore};
pub use task::Task;

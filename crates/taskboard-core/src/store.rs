//! Authoritative in-memory task collection and the edit-mode state machine.

use std::collections::HashSet;
use std::mem;

use tracing::debug;

use crate::error::{Result, StoreError};
use crate::id::{AlphanumericIds, IdGenerator, TaskId};
use crate::task::{Task, validate};

/// Which task, if any, is the target of the next form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    /// No task is being edited.
    #[default]
    Idle,
    /// The given task is being edited.
    Editing(TaskId),
}

impl EditState {
    /// `true` when nothing is being edited.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Identifier of the task being edited.
    #[must_use]
    pub const fn editing_id(&self) -> Option<&TaskId> {
        match self {
            Self::Idle => None,
            Self::Editing(id) => Some(id),
        }
    }

    /// `true` when `id` is the task being edited.
    #[must_use]
    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.editing_id() == Some(id)
    }
}

/// Notification emitted by every successful mutation, consumed by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    /// A task was added at the front of the display order.
    Created(Task),
    /// Title and text of an existing task changed.
    Updated(Task),
    /// A task was removed.
    Deleted {
        /// Identifier of the removed task.
        id: TaskId,
    },
    /// A task became the edit target.
    EditSelected(Task),
    /// Edit mode ended for the given task.
    EditCancelled {
        /// Identifier of the task that was being edited.
        id: TaskId,
    },
}

/// A deletion waiting for the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionRequest {
    id: TaskId,
}

impl DeletionRequest {
    /// Task the request targets.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }
}

/// Result of a delete that got past the existence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deletion {
    /// The task was removed.
    Removed(Task),
    /// The user declined; nothing changed.
    Declined,
}

/// Synchronous "should this deletion proceed?" collaborator.
pub trait Confirmation {
    /// Return `true` to delete `task`.
    fn confirm_delete(&mut self, task: &Task) -> bool;
}

impl<F> Confirmation for F
where
    F: FnMut(&Task) -> bool,
{
    fn confirm_delete(&mut self, task: &Task) -> bool {
        self(task)
    }
}

/// Owns every task plus the single edit slot.
///
/// Mutations queue [`StoreChange`] values that the caller collects with
/// [`TaskStore::drain_changes`]; the store itself never talks to a view.
#[derive(Debug)]
pub struct TaskStore<G = AlphanumericIds> {
    ids: G,
    /// Insertion order, oldest first. Display order is the reverse.
    tasks: Vec<Task>,
    /// Every id handed out so far, including deleted ones.
    issued: HashSet<TaskId>,
    edit: EditState,
    pending: Option<DeletionRequest>,
    changes: Vec<StoreChange>,
}

impl TaskStore<AlphanumericIds> {
    /// Empty store using random alphanumeric ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(AlphanumericIds::new())
    }
}

impl Default for TaskStore<AlphanumericIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> TaskStore<G> {
    /// Empty store drawing ids from `ids`.
    pub fn with_generator(ids: G) -> Self {
        Self {
            ids,
            tasks: Vec::new(),
            issued: HashSet::new(),
            edit: EditState::Idle,
            pending: None,
            changes: Vec::new(),
        }
    }

    /// Add a task in front of the display order.
    ///
    /// # Errors
    /// Returns [`StoreError::Validation`] if `title` or `text` is empty.
    pub fn create(&mut self, title: impl Into<String>, text: impl Into<String>) -> Result<Task> {
        let (title, text) = (title.into(), text.into());
        validate(&title, &text)?;

        let task = Task {
            id: self.fresh_id(),
            title,
            text,
        };
        debug!(id = %task.id, "Created task");
        self.tasks.push(task.clone());
        self.changes.push(StoreChange::Created(task.clone()));
        Ok(task)
    }

    /// Replace title and text of an existing task.
    ///
    /// Committing the task currently being edited also leaves edit mode.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] for unknown ids, then
    /// [`StoreError::Validation`] if `title` or `text` is empty.
    pub fn update(
        &mut self,
        id: &TaskId,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Task> {
        let index = self.position(id)?;
        let (title, text) = (title.into(), text.into());
        validate(&title, &text)?;

        let task = &mut self.tasks[index];
        task.title = title;
        task.text = text;
        let task = task.clone();
        debug!(%id, "Updated task");
        self.changes.push(StoreChange::Updated(task.clone()));

        if self.edit.is_editing(id) {
            self.edit = EditState::Idle;
            self.changes.push(StoreChange::EditCancelled { id: id.clone() });
        }
        Ok(task)
    }

    /// Delete a task after asking `confirm`.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] for unknown ids. The confirmation is
    /// not consulted in that case.
    pub fn delete(&mut self, id: &TaskId, confirm: &mut impl Confirmation) -> Result<Deletion> {
        let index = self.position(id)?;
        if !confirm.confirm_delete(&self.tasks[index]) {
            debug!(%id, "Deletion declined");
            return Ok(Deletion::Declined);
        }
        Ok(Deletion::Removed(self.remove(index)))
    }

    /// First half of a non-blocking delete: remember what to delete.
    ///
    /// A newer request replaces an unresolved older one.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] for unknown ids.
    pub fn request_delete(&mut self, id: &TaskId) -> Result<DeletionRequest> {
        self.position(id)?;
        let request = DeletionRequest { id: id.clone() };
        self.pending = Some(request.clone());
        Ok(request)
    }

    /// Deletion awaiting an answer, if any.
    #[must_use]
    pub const fn pending_deletion(&self) -> Option<&DeletionRequest> {
        self.pending.as_ref()
    }

    /// Second half of a non-blocking delete.
    ///
    /// # Errors
    /// Returns [`StoreError::NoPendingDeletion`] if nothing was requested and
    /// [`StoreError::NotFound`] if the task vanished in the meantime.
    pub fn resolve_delete(&mut self, proceed: bool) -> Result<Deletion> {
        let request = self.pending.take().ok_or(StoreError::NoPendingDeletion)?;
        if !proceed {
            debug!(id = %request.id, "Deletion declined");
            return Ok(Deletion::Declined);
        }
        let index = self.position(&request.id)?;
        Ok(Deletion::Removed(self.remove(index)))
    }

    /// Make `id` the edit target, implicitly cancelling any other edit.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] for unknown ids.
    pub fn select_for_edit(&mut self, id: &TaskId) -> Result<Task> {
        let task = self.tasks[self.position(id)?].clone();
        let previous = mem::replace(&mut self.edit, EditState::Editing(id.clone()));
        if let EditState::Editing(previous) = previous
            && previous != *id
        {
            debug!(%previous, "Cancelled edit in favour of another task");
            self.changes.push(StoreChange::EditCancelled { id: previous });
        }
        debug!(%id, "Editing task");
        self.changes.push(StoreChange::EditSelected(task.clone()));
        Ok(task)
    }

    /// Leave edit mode. Returns the task that was being edited.
    pub fn cancel_edit(&mut self) -> Option<TaskId> {
        let EditState::Editing(id) = mem::take(&mut self.edit) else {
            return None;
        };
        debug!(%id, "Cancelled edit");
        self.changes.push(StoreChange::EditCancelled { id: id.clone() });
        Some(id)
    }

    fn remove(&mut self, index: usize) -> Task {
        let task = self.tasks.remove(index);
        if self.edit.is_editing(&task.id) {
            self.edit = EditState::Idle;
            self.changes.push(StoreChange::EditCancelled {
                id: task.id.clone(),
            });
        }
        if self.pending.as_ref().is_some_and(|req| req.id == task.id) {
            self.pending = None;
        }
        debug!(id = %task.id, "Deleted task");
        self.changes.push(StoreChange::Deleted {
            id: task.id.clone(),
        });
        task
    }

    fn fresh_id(&mut self) -> TaskId {
        loop {
            let id = self.ids.generate();
            if self.issued.insert(id.clone()) {
                return id;
            }
            debug!(%id, "Regenerating colliding task id");
        }
    }
}

impl<G> TaskStore<G> {
    /// Look up a task.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == *id)
    }

    /// Tasks in display order, newest first.
    pub fn tasks(&self) -> impl DoubleEndedIterator<Item = &Task> + ExactSizeIterator {
        self.tasks.iter().rev()
    }

    /// Number of live tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// `true` when the store holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Current edit-mode state.
    #[must_use]
    pub const fn edit_state(&self) -> &EditState {
        &self.edit
    }

    /// Task currently being edited.
    #[must_use]
    pub fn editing(&self) -> Option<&Task> {
        self.edit.editing_id().and_then(|id| self.get(id))
    }

    /// Take every queued change, oldest first.
    pub fn drain_changes(&mut self) -> Vec<StoreChange> {
        mem::take(&mut self.changes)
    }

    fn position(&self, id: &TaskId) -> Result<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == *id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}

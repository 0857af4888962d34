//! Event handler layer: user intents in, store calls and feedback out.

use taskboard_core::{
    AlphanumericIds, Confirmation, Deletion, Field, IdGenerator, StoreError, TaskId, TaskStore,
};
use tracing::{debug, warn};

use crate::surface::{FormSurface, MessageKey, Notifier, RowSurface};
use crate::view_sync::ViewSync;

/// Per-row control the user activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowButton {
    /// Delete the row (asks for confirmation first).
    Remove,
    /// Load the row into the form.
    Edit,
    /// Leave edit mode.
    CancelEdit,
}

/// What a handler did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The store changed and the view was updated.
    Applied,
    /// A deletion is waiting for the user's answer.
    AwaitingConfirmation,
    /// The user declined a deletion.
    Declined,
    /// Nothing to do.
    Ignored,
    /// The store refused; the user has been told.
    Rejected(StoreError),
}

/// Owns the store and the view and keeps them in step.
///
/// Errors never escape a handler; they are logged, surfaced through the
/// [`Notifier`], and reported back as [`Outcome::Rejected`].
#[derive(Debug)]
pub struct Controller<V, G = AlphanumericIds> {
    store: TaskStore<G>,
    view: ViewSync<V>,
}

impl<V> Controller<V, AlphanumericIds>
where
    V: RowSurface + FormSurface + Notifier,
{
    /// Controller with an empty store and random ids.
    pub fn new(surface: V) -> Self {
        Self::with_store(TaskStore::new(), surface)
    }
}

impl<V, G> Controller<V, G>
where
    V: RowSurface + FormSurface + Notifier,
    G: IdGenerator,
{
    /// Controller around an existing store.
    pub fn with_store(store: TaskStore<G>, surface: V) -> Self {
        let mut controller = Self {
            store,
            view: ViewSync::new(surface),
        };
        controller.view.reset_form();
        controller
    }

    /// Read-only view of the store.
    pub const fn store(&self) -> &TaskStore<G> {
        &self.store
    }

    /// Borrow the surface.
    pub const fn surface(&self) -> &V {
        self.view.surface()
    }

    /// Borrow the surface mutably, e.g. to let it track typed input.
    pub const fn surface_mut(&mut self) -> &mut V {
        self.view.surface_mut()
    }

    /// Form submission: commit the edit in progress, or add a new task.
    pub fn submit(&mut self, title: &str, text: &str) -> Outcome {
        if title.is_empty() || text.is_empty() {
            self.notify(MessageKey::FillAllFields);
            let field = if title.is_empty() { Field::Title } else { Field::Text };
            return Outcome::Rejected(StoreError::Validation { field });
        }

        if let Some(id) = self.store.edit_state().editing_id().cloned() {
            return match self.store.update(&id, title, text) {
                Ok(_) => {
                    self.flush();
                    self.notify(MessageKey::TaskUpdated);
                    Outcome::Applied
                }
                Err(err) => self.reject(err),
            };
        }

        match self.store.create(title, text) {
            Ok(_) => {
                self.flush();
                self.view.reset_form();
                self.notify(MessageKey::TaskAdded);
                Outcome::Applied
            }
            Err(err) => self.reject(err),
        }
    }

    /// The title input changed; the text input is usable only with a title.
    pub fn title_changed(&mut self, title: &str) {
        self.view.set_text_enabled(!title.is_empty());
    }

    /// A control on a row was activated.
    pub fn row_action(&mut self, id: &TaskId, button: RowButton) -> Outcome {
        match button {
            RowButton::Remove => match self.store.request_delete(id) {
                Ok(request) => {
                    if let Some(task) = self.store.get(request.id()) {
                        self.view.surface_mut().confirm_requested(task);
                    }
                    Outcome::AwaitingConfirmation
                }
                Err(err) => self.reject(err),
            },
            RowButton::Edit => match self.store.select_for_edit(id) {
                Ok(_) => {
                    self.flush();
                    Outcome::Applied
                }
                Err(err) => self.reject(err),
            },
            RowButton::CancelEdit => self.cancel_edit(),
        }
    }

    /// Leave edit mode, if active.
    pub fn cancel_edit(&mut self) -> Outcome {
        if self.store.cancel_edit().is_none() {
            return Outcome::Ignored;
        }
        self.flush();
        Outcome::Applied
    }

    /// The user answered the pending deletion prompt.
    pub fn confirm_deletion(&mut self, proceed: bool) -> Outcome {
        let result = self.store.resolve_delete(proceed);
        self.finish_deletion(result)
    }

    /// Delete with a synchronous confirmation.
    pub fn delete_now(&mut self, id: &TaskId, confirm: &mut impl Confirmation) -> Outcome {
        let result = self.store.delete(id, confirm);
        self.finish_deletion(result)
    }

    fn finish_deletion(&mut self, result: Result<Deletion, StoreError>) -> Outcome {
        match result {
            Ok(Deletion::Removed(task)) => {
                debug!(id = %task.id, "Deletion confirmed");
                self.flush();
                self.notify(MessageKey::TaskDeleted);
                Outcome::Applied
            }
            Ok(Deletion::Declined) => Outcome::Declined,
            Err(err) => self.reject(err),
        }
    }

    fn flush(&mut self) {
        let changes = self.store.drain_changes();
        self.view.apply_all(&changes);
    }

    fn notify(&mut self, key: MessageKey) {
        self.view.surface_mut().notify(key, key.severity());
    }

    fn reject(&mut self, err: StoreError) -> Outcome {
        warn!(%err, "Rejected task operation");
        match &err {
            StoreError::Validation { .. } => self.notify(MessageKey::FillAllFields),
            StoreError::NotFound(_) => self.notify(MessageKey::TaskNotFound),
            StoreError::NoPendingDeletion => {}
        }
        self.flush();
        Outcome::Rejected(err)
    }
}

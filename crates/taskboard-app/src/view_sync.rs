use taskboard_core::StoreChange;

use crate::surface::{FormSurface, RowAffordances, RowSurface, SubmitLabel};

/// Projects store changes onto a surface.
///
/// Holds no state of its own beyond the surface; the store is never read.
#[derive(Debug)]
pub struct ViewSync<V> {
    surface: V,
}

impl<V> ViewSync<V> {
    /// Wrap a surface.
    pub const fn new(surface: V) -> Self {
        Self { surface }
    }

    /// Borrow the surface.
    pub const fn surface(&self) -> &V {
        &self.surface
    }

    /// Borrow the surface mutably.
    pub const fn surface_mut(&mut self) -> &mut V {
        &mut self.surface
    }

    /// Unwrap the surface.
    pub fn into_inner(self) -> V {
        self.surface
    }
}

impl<V: RowSurface + FormSurface> ViewSync<V> {
    /// Apply the minimal surface mutation for `change`.
    pub fn apply(&mut self, change: &StoreChange) {
        match change {
            StoreChange::Created(task) => self.surface.prepend_row(task),
            StoreChange::Updated(task) => self.surface.update_row(&task.id, &task.title, &task.text),
            StoreChange::Deleted { id } => self.surface.remove_row(id),
            StoreChange::EditSelected(task) => {
                self.surface.fill_form(&task.title, &task.text);
                self.surface.set_text_enabled(true);
                self.surface.set_submit_label(SubmitLabel::Edit);
                self.surface
                    .set_row_affordances(&task.id, RowAffordances::EDITING);
            }
            StoreChange::EditCancelled { id } => {
                self.reset_form();
                self.surface.set_submit_label(SubmitLabel::Add);
                self.surface.set_row_affordances(id, RowAffordances::DEFAULT);
            }
        }
    }

    /// Apply changes in order.
    pub fn apply_all<'a>(&mut self, changes: impl IntoIterator<Item = &'a StoreChange>) {
        for change in changes {
            self.apply(change);
        }
    }

    /// Empty the form and lock the text input until a title is typed.
    pub fn reset_form(&mut self) {
        self.surface.reset_form();
        self.surface.set_text_enabled(false);
    }

    /// Lock or unlock the text input.
    pub fn set_text_enabled(&mut self, enabled: bool) {
        self.surface.set_text_enabled(enabled);
    }
}

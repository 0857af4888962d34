//! Contracts the view layer must fulfil.

use taskboard_core::{Task, TaskId};

/// Visibility of the per-row edit and cancel controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAffordances {
    /// The "edit" control is shown.
    pub edit_visible: bool,
    /// The "cancel edit" control is shown.
    pub cancel_visible: bool,
}

impl RowAffordances {
    /// Row at rest: edit shown, cancel hidden.
    pub const DEFAULT: Self = Self {
        edit_visible: true,
        cancel_visible: false,
    };
    /// Row being edited: edit hidden, cancel shown.
    pub const EDITING: Self = Self {
        edit_visible: false,
        cancel_visible: true,
    };
}

impl Default for RowAffordances {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Label on the form's submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitLabel {
    /// Submitting adds a new task.
    #[default]
    Add,
    /// Submitting commits the task being edited.
    Edit,
}

impl SubmitLabel {
    /// Text shown on the control.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "Add task",
            Self::Edit => "Edit task",
        }
    }
}

/// Table of task rows.
pub trait RowSurface {
    /// Insert a row for `task` above all existing rows.
    fn prepend_row(&mut self, task: &Task);
    /// Refresh the two text cells of a row.
    fn update_row(&mut self, id: &TaskId, title: &str, text: &str);
    /// Drop a row.
    fn remove_row(&mut self, id: &TaskId);
    /// Show or hide the edit/cancel controls of a row.
    fn set_row_affordances(&mut self, id: &TaskId, affordances: RowAffordances);
}

/// The shared two-field input form.
pub trait FormSurface {
    /// Put values into both inputs.
    fn fill_form(&mut self, title: &str, text: &str);
    /// Clear both inputs.
    fn reset_form(&mut self);
    /// Enable or disable the text input.
    fn set_text_enabled(&mut self, enabled: bool);
    /// Relabel the submit control.
    fn set_submit_label(&mut self, label: SubmitLabel);
}

/// What a transient notification says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    /// Submit with an empty field.
    FillAllFields,
    /// A task was created.
    TaskAdded,
    /// A task was edited.
    TaskUpdated,
    /// A task was deleted.
    TaskDeleted,
    /// The targeted task no longer exists.
    TaskNotFound,
}

impl MessageKey {
    /// Default English wording.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::FillAllFields => "Fill in all fields",
            Self::TaskAdded => "Task added",
            Self::TaskUpdated => "Task updated",
            Self::TaskDeleted => "Task deleted",
            Self::TaskNotFound => "Task not found",
        }
    }

    /// Severity the message is normally shown with.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::TaskAdded | Self::TaskUpdated => Severity::Success,
            Self::TaskDeleted => Severity::Warning,
            Self::FillAllFields | Self::TaskNotFound => Severity::Danger,
        }
    }
}

/// How loudly a notification is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something went as asked.
    Success,
    /// Something destructive went as asked.
    Warning,
    /// The request was rejected.
    Danger,
}

/// Transient user feedback. Display timing is the implementor's concern.
pub trait Notifier {
    /// Show a message.
    fn notify(&mut self, key: MessageKey, severity: Severity);
    /// Ask the user whether `task` should be deleted. The answer comes back
    /// through `Controller::confirm_deletion`.
    fn confirm_requested(&mut self, task: &Task);
}

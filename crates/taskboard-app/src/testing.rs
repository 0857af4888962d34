//! Recording surface shared by the unit tests.

use taskboard_core::{Task, TaskId};

use crate::surface::{FormSurface, MessageKey, Notifier, RowAffordances, RowSurface, Severity, SubmitLabel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Prepend(TaskId),
    UpdateRow(TaskId, String, String),
    Remove(TaskId),
    Affordances(TaskId, RowAffordances),
    Fill(String, String),
    ResetForm,
    TextEnabled(bool),
    Label(SubmitLabel),
    Notify(MessageKey, Severity),
    Confirm(TaskId),
}

#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) calls: Vec<Call>,
}

impl Recorder {
    pub(crate) fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }
}

impl RowSurface for Recorder {
    fn prepend_row(&mut self, task: &Task) {
        self.calls.push(Call::Prepend(task.id.clone()));
    }

    fn update_row(&mut self, id: &TaskId, title: &str, text: &str) {
        self.calls
            .push(Call::UpdateRow(id.clone(), title.to_owned(), text.to_owned()));
    }

    fn remove_row(&mut self, id: &TaskId) {
        self.calls.push(Call::Remove(id.clone()));
    }

    fn set_row_affordances(&mut self, id: &TaskId, affordances: RowAffordances) {
        self.calls.push(Call::Affordances(id.clone(), affordances));
    }
}

impl FormSurface for Recorder {
    fn fill_form(&mut self, title: &str, text: &str) {
        self.calls.push(Call::Fill(title.to_owned(), text.to_owned()));
    }

    fn reset_form(&mut self) {
        self.calls.push(Call::ResetForm);
    }

    fn set_text_enabled(&mut self, enabled: bool) {
        self.calls.push(Call::TextEnabled(enabled));
    }

    fn set_submit_label(&mut self, label: SubmitLabel) {
        self.calls.push(Call::Label(label));
    }
}

impl Notifier for Recorder {
    fn notify(&mut self, key: MessageKey, severity: Severity) {
        self.calls.push(Call::Notify(key, severity));
    }

    fn confirm_requested(&mut self, task: &Task) {
        self.calls.push(Call::Confirm(task.id.clone()));
    }
}

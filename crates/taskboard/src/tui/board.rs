//! In-terminal rendering surface: the rows, the form, and transient feedback.

use std::time::{Duration, Instant};

use ratatui::style::{Color, Style};
use taskboard_app::{
    FormSurface, MessageKey, Notifier, RowAffordances, RowSurface, Severity, SubmitLabel,
};
use taskboard_core::{Task, TaskId};

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Row {
    pub(super) id: TaskId,
    pub(super) title: String,
    pub(super) text: String,
    pub(super) affordances: RowAffordances,
}

/// The two inputs and the submit control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct FormState {
    pub(super) title: String,
    pub(super) text: String,
    pub(super) text_enabled: bool,
    pub(super) label: SubmitLabel,
}

/// Notification shown in the status area until it expires.
#[derive(Debug, Clone)]
pub(super) struct Banner {
    pub(super) key: MessageKey,
    pub(super) severity: Severity,
    created_at: Instant,
}

impl Banner {
    fn new(key: MessageKey, severity: Severity) -> Self {
        Self {
            key,
            severity,
            created_at: Instant::now(),
        }
    }

    pub(super) fn style(&self) -> Style {
        match self.severity {
            Severity::Success => Style::default().fg(Color::Green),
            Severity::Warning => Style::default().fg(Color::Yellow),
            Severity::Danger => Style::default().fg(Color::Red),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}

/// Deletion the user is being asked about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ConfirmPrompt {
    pub(super) id: TaskId,
    pub(super) title: String,
}

/// Terminal counterpart of the page: everything the user sees.
#[derive(Debug, Default)]
pub(super) struct Board {
    pub(super) rows: Vec<Row>,
    pub(super) form: FormState,
    pub(super) banner: Option<Banner>,
    pub(super) confirm: Option<ConfirmPrompt>,
}

impl Board {
    pub(super) fn position(&self, id: &TaskId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == *id)
    }

    /// Drop the banner once it has been visible for `ttl`.
    pub(super) fn expire_banner(&mut self, ttl: Duration) {
        if self.banner.as_ref().is_some_and(|banner| banner.is_expired(ttl)) {
            self.banner = None;
        }
    }

    fn row_mut(&mut self, id: &TaskId) -> Option<&mut Row> {
        self.rows.iter_mut().find(|row| row.id == *id)
    }
}

impl RowSurface for Board {
    fn prepend_row(&mut self, task: &Task) {
        self.rows.insert(
            0,
            Row {
                id: task.id.clone(),
                title: task.title.clone(),
                text: task.text.clone(),
                affordances: RowAffordances::DEFAULT,
            },
        );
    }

    fn update_row(&mut self, id: &TaskId, title: &str, text: &str) {
        if let Some(row) = self.row_mut(id) {
            title.clone_into(&mut row.title);
            text.clone_into(&mut row.text);
        }
    }

    fn remove_row(&mut self, id: &TaskId) {
        self.rows.retain(|row| row.id != *id);
    }

    fn set_row_affordances(&mut self, id: &TaskId, affordances: RowAffordances) {
        if let Some(row) = self.row_mut(id) {
            row.affordances = affordances;
        }
    }
}

impl FormSurface for Board {
    fn fill_form(&mut self, title: &str, text: &str) {
        title.clone_into(&mut self.form.title);
        text.clone_into(&mut self.form.text);
    }

    fn reset_form(&mut self) {
        self.form.title.clear();
        self.form.text.clear();
    }

    fn set_text_enabled(&mut self, enabled: bool) {
        self.form.text_enabled = enabled;
    }

    fn set_submit_label(&mut self, label: SubmitLabel) {
        self.form.label = label;
    }
}

impl Notifier for Board {
    fn notify(&mut self, key: MessageKey, severity: Severity) {
        self.banner = Some(Banner::new(key, severity));
    }

    fn confirm_requested(&mut self, task: &Task) {
        self.confirm = Some(ConfirmPrompt {
            id: task.id.clone(),
            title: task.title.clone(),
        });
    }
}

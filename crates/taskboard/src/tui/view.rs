use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use taskboard_app::Controller;
use taskboard_core::{AlphanumericIds, IdGenerator, TaskId, TaskStore};

use super::board::Board;
use super::constants::TASK_TABLE_WIDTH_PERCENT;
use crate::config::{KeyBindingsConfig, TuiConfig, ViewType};

/// Input that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FormField {
    Title,
    Text,
}

/// Where key presses go when no popup is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    /// Browsing the task table.
    List,
    /// Typing into the form.
    Form(FormField),
}

pub(super) struct Ui<G = AlphanumericIds> {
    pub(super) controller: Controller<Board, G>,
    pub(super) focus: Focus,
    /// Index into the board's rows.
    pub(super) selected: usize,
    pub(super) should_quit: bool,
    pub(super) keybindings: KeyBindingsConfig,
    message_ttl: Duration,
}

impl Ui<AlphanumericIds> {
    pub(super) fn new(config: &TuiConfig) -> Self {
        Self::with_store(TaskStore::new(), config)
    }
}

impl<G: IdGenerator> Ui<G> {
    pub(super) const STATUS_HEIGHT: u16 = 4;
    pub(super) const MAIN_MIN_HEIGHT: u16 = 5;

    pub(super) fn with_store(store: TaskStore<G>, config: &TuiConfig) -> Self {
        Self {
            controller: Controller::with_store(store, Board::default()),
            focus: Focus::Form(FormField::Title),
            selected: 0,
            should_quit: false,
            keybindings: config.keybindings.clone(),
            message_ttl: config.message_ttl(),
        }
    }

    pub(super) const fn board(&self) -> &Board {
        self.controller.surface()
    }

    pub(super) fn selected_task_id(&self) -> Option<TaskId> {
        self.board().rows.get(self.selected).map(|row| row.id.clone())
    }

    /// Keybinding context for the current focus.
    pub(super) fn view_type(&self) -> ViewType {
        if self.board().confirm.is_some() {
            return ViewType::Confirm;
        }
        match self.focus {
            Focus::List => ViewType::TaskList,
            Focus::Form(_) => ViewType::Form,
        }
    }

    pub(super) fn tick(&mut self) {
        let ttl = self.message_ttl;
        self.controller.surface_mut().expire_banner(ttl);
    }

    pub(super) fn draw(&self, f: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(Self::MAIN_MIN_HEIGHT),
                Constraint::Length(Self::STATUS_HEIGHT),
            ])
            .split(f.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(TASK_TABLE_WIDTH_PERCENT),
                Constraint::Percentage(100 - TASK_TABLE_WIDTH_PERCENT),
            ])
            .split(chunks[0]);

        self.draw_task_table(f, columns[0]);
        self.draw_form(f, columns[1]);
        self.draw_status(f, chunks[1]);

        if self.board().confirm.is_some() {
            self.draw_confirm_popup(f);
        }
    }

    fn draw_status(&self, f: &mut Frame<'_>, area: Rect) {
        let message = self.board().banner.as_ref().map_or_else(
            || Line::from(""),
            |banner| Line::styled(banner.key.text(), banner.style()),
        );
        let help = Line::styled(
            self.keybindings.generate_help_text(self.view_type()),
            Style::default().fg(Color::DarkGray),
        );
        let status = Paragraph::new(vec![message, help])
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(status, area);
    }
}

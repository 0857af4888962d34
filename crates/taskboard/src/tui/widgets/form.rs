use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use taskboard_core::IdGenerator;

use super::super::constants::INPUT_CURSOR;
use super::super::view::{Focus, FormField, Ui};

const INPUT_HEIGHT: u16 = 3;

impl<G: IdGenerator> Ui<G> {
    pub(in crate::tui) fn draw_form(&self, f: &mut Frame<'_>, area: Rect) {
        let form = &self.board().form;
        let editing = !self.controller.store().edit_state().is_idle();
        let title = if editing { "Edit task" } else { "New task" };
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        self.draw_input(f, chunks[0], "Title", &form.title, FormField::Title, true);
        self.draw_input(
            f,
            chunks[1],
            "Text",
            &form.text,
            FormField::Text,
            form.text_enabled,
        );

        let submit = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!("[ {} ]", form.label.as_str()),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
        ]);
        f.render_widget(Paragraph::new(submit), chunks[2]);
    }

    fn draw_input(
        &self,
        f: &mut Frame<'_>,
        area: Rect,
        label: &str,
        value: &str,
        field: FormField,
        enabled: bool,
    ) {
        let focused = self.focus == Focus::Form(field);
        let (border, content) = if !enabled {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )
        } else if focused {
            (Style::default().fg(Color::Cyan), Style::default())
        } else {
            (Style::default(), Style::default())
        };

        let mut spans = vec![Span::styled(value, content)];
        if focused && enabled {
            spans.push(Span::styled(INPUT_CURSOR, Style::default().fg(Color::Cyan)));
        }
        let input = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(label)
                .borders(Borders::ALL)
                .border_style(border),
        );
        f.render_widget(input, area);
    }
}

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};
use taskboard_app::RowAffordances;
use taskboard_core::IdGenerator;

use super::super::constants::{
    CANCEL_AFFORDANCE, EDIT_AFFORDANCE, REMOVE_AFFORDANCE, TASK_TABLE_HIGHLIGHT_SYMBOL,
};
use super::super::view::{Focus, Ui};

impl<G: IdGenerator> Ui<G> {
    pub(in crate::tui) fn draw_task_table(&self, f: &mut Frame<'_>, area: Rect) {
        let border_style = if self.focus == Focus::List {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title(format!("Tasks ({})", self.board().rows.len()))
            .borders(Borders::ALL)
            .border_style(border_style);

        let rows = &self.board().rows;
        if rows.is_empty() {
            let empty = Table::new(
                [Row::new([Cell::from(Line::styled(
                    "No tasks yet",
                    Style::default().fg(Color::DarkGray),
                ))])],
                [Constraint::Fill(1)],
            )
            .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items = rows.iter().map(|row| {
            let style = if row.affordances.cancel_visible {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Row::new([
                Cell::from(Span::styled(
                    row.title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Cell::from(row.text.as_str()),
                Cell::from(affordance_line(row.affordances)),
            ])
            .style(style)
        });

        let table = Table::new(
            items,
            [
                Constraint::Percentage(35),
                Constraint::Fill(1),
                Constraint::Length(15),
            ],
        )
        .header(
            Row::new(["Title", "Text", "Actions"])
                .style(Style::default().add_modifier(Modifier::UNDERLINED)),
        )
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(TASK_TABLE_HIGHLIGHT_SYMBOL);

        let mut state = TableState::default().with_selected(Some(self.selected));
        f.render_stateful_widget(table, area, &mut state);
    }
}

fn affordance_line(affordances: RowAffordances) -> Line<'static> {
    let mut spans = vec![Span::styled(REMOVE_AFFORDANCE, Style::default().fg(Color::Red))];
    if affordances.edit_visible {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(EDIT_AFFORDANCE, Style::default().fg(Color::Cyan)));
    }
    if affordances.cancel_visible {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(CANCEL_AFFORDANCE, Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

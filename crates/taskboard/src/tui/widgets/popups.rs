use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use taskboard_core::IdGenerator;

use super::super::constants::{
    CONFIRM_POPUP_HEIGHT, CONFIRM_POPUP_MIN_WIDTH, CONFIRM_POPUP_WIDTH_PERCENT,
    CONFIRM_TITLE_MAX_GRAPHEMES,
};
use super::super::view::Ui;
use super::util::truncate_with_ellipsis;
use crate::config::ViewType;

impl<G: IdGenerator> Ui<G> {
    pub(in crate::tui) fn draw_confirm_popup(&self, f: &mut Frame<'_>) {
        let Some(prompt) = &self.board().confirm else {
            return;
        };
        let area = f.area();

        let scaled = u32::from(area.width) * u32::from(CONFIRM_POPUP_WIDTH_PERCENT) / 100;
        let popup_width = u16::try_from(scaled)
            .unwrap_or(area.width)
            .max(CONFIRM_POPUP_MIN_WIDTH)
            .min(area.width);
        let popup_height = CONFIRM_POPUP_HEIGHT.min(area.height);
        let popup_area = Rect {
            x: area.width.saturating_sub(popup_width) / 2,
            y: area.height.saturating_sub(popup_height) / 2,
            width: popup_width,
            height: popup_height,
        };

        let block = Block::default()
            .title("Delete task?")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));

        let title = truncate_with_ellipsis(&prompt.title, CONFIRM_TITLE_MAX_GRAPHEMES);
        let lines = vec![
            Line::from(vec![
                Span::raw("Remove "),
                Span::styled(
                    format!("\"{title}\""),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("?"),
            ]),
            Line::styled(
                self.keybindings.generate_help_text(ViewType::Confirm),
                Style::default().fg(Color::DarkGray),
            ),
        ];

        f.render_widget(Clear, popup_area);
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, popup_area);
    }
}

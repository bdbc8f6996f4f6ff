use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::core::state::input::SearchState;

/// Bordered one-line search box, three rows tall
#[derive(Debug, Clone)]
pub struct SearchBar<'a> {
    search: &'a SearchState,
    placeholder: &'a str,
    focused_style: Style,
    muted_style: Style,
}

impl<'a> SearchBar<'a> {
    pub const HEIGHT: u16 = 3;

    pub fn new(search: &'a SearchState, placeholder: &'a str) -> Self {
        Self {
            search,
            placeholder,
            focused_style: Style::default(),
            muted_style: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn focused_style(mut self, style: Style) -> Self {
        self.focused_style = style;
        self
    }

    pub fn muted_style(mut self, style: Style) -> Self {
        self.muted_style = style;
        self
    }

    /// Terminal cursor position while editing, clamped to the box
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.search.editing || area.width < 3 || area.height < 3 {
            return None;
        }
        let before: String = self
            .search
            .query()
            .chars()
            .take(self.search.input.cursor.column)
            .collect();
        let offset = u16::try_from(before.width()).unwrap_or(u16::MAX);
        let max_x = area.right().saturating_sub(2);
        Some(Position::new(
            (area.x + 1).saturating_add(offset).min(max_x),
            area.y + 1,
        ))
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Search ");
        if self.search.editing {
            block = block.border_style(self.focused_style);
        }

        let query = self.search.query();
        let content = if query.is_empty() && !self.search.editing {
            Line::styled(self.placeholder, self.muted_style)
        } else {
            Line::raw(query)
        };
        Paragraph::new(content).block(block).render(area, buf);
    }
}

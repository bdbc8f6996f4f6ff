use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::core::state::AppState;

const WIDTH: u16 = 56;
const HEIGHT: u16 = 8;

/// Centered delete confirmation drawn over the page
#[derive(Debug, Clone)]
pub struct ConfirmDialogComponent;

impl ConfirmDialogComponent {
    pub fn new() -> Self {
        Self
    }

    /// The popup rectangle, shrunk to fit small terminals
    pub fn popup_area(area: Rect) -> Rect {
        let width = WIDTH.min(area.width);
        let height = HEIGHT.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(dialog) = &state.dialog else {
            return;
        };
        let styles = &state.config.config.styles;
        let popup = Self::popup_area(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(styles.style("dialog_border"))
            .title(Line::styled(
                format!(" {} ", dialog.heading()),
                styles.style("error"),
            ));
        let text = vec![
            Line::raw(dialog.message()),
            Line::default(),
            Line::from(vec![
                Span::styled("[y]", styles.style("error")),
                Span::raw(" Delete  "),
                Span::styled("[n]", styles.style("title")),
                Span::raw(" Cancel"),
            ])
            .centered(),
        ];

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .block(block.padding(Padding::horizontal(1))),
            popup,
        );
    }
}

impl Default for ConfirmDialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{
        core::state::dialog::{ConfirmDialog, PendingDelete},
        infrastructure::config::Config,
    };

    #[test]
    fn test_popup_area() {
        assert_eq!(
            ConfirmDialogComponent::popup_area(Rect::new(0, 0, 100, 30)),
            Rect::new(22, 11, 56, 8)
        );
        assert_eq!(
            ConfirmDialogComponent::popup_area(Rect::new(0, 0, 40, 6)),
            Rect::new(0, 0, 40, 6)
        );
    }

    #[test]
    fn test_renders_over_page() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
        let mut state = AppState::new(Config::defaults().expect("embedded config"), today);
        state.dialog = Some(ConfirmDialog::new(PendingDelete::Course {
            course_id: "CS101".into(),
            title: "Programming".into(),
        }));

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).expect("terminal");
        terminal
            .draw(|frame| ConfirmDialogComponent::new().view(&state, frame, frame.area()))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        let screen: String = (0..20)
            .map(|y| {
                (0..80)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(screen.contains("Delete Course"));
        assert!(screen.contains("\"Programming\"?"));
        assert!(screen.contains("[y] Delete  [n] Cancel"));
    }
}

//! Status bar component
//!
//! One row at the bottom of the screen: the page title, the latest status
//! message, a loading marker and the keys that apply right now.

use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

use crate::{
    core::state::{nav::Route, AppState, InputMode},
    presentation::{components::key_hint, config::keybindings::Action},
};

#[derive(Debug, Clone)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Key hints for the current input mode and page
    pub fn hints(state: &AppState) -> String {
        let bound = |action: Action, fallback: &str, label: &str| {
            format!("{} {label}", key_hint(state, action, fallback))
        };
        let hints: Vec<String> = match state.input_mode() {
            InputMode::Dialog => vec!["y confirm".to_owned(), "n cancel".to_owned()],
            InputMode::Search => vec!["enter done".to_owned(), "esc clear".to_owned()],
            InputMode::Form => vec![
                "tab next".to_owned(),
                "ctrl-s submit".to_owned(),
                "esc cancel".to_owned(),
            ],
            InputMode::Normal => {
                let mut hints = vec![bound(Action::Quit, "q", "quit")];
                hints.push(bound(Action::ToggleFocus, "tab", "focus"));
                match state.route() {
                    Route::Courses | Route::Instances => {
                        hints.push(bound(Action::Search, "/", "search"));
                        hints.push(bound(Action::Create, "n", "new"));
                        hints.push(bound(Action::Delete, "d", "delete"));
                    }
                    Route::CourseDetail(_) => {
                        hints.push(bound(Action::Create, "n", "new instance"));
                        hints.push(bound(Action::Delete, "d", "delete"));
                    }
                    Route::InstanceDetail { .. } => {
                        hints.push(bound(Action::Delete, "d", "delete"));
                    }
                    _ => {}
                }
                hints.push(bound(Action::Refresh, "r", "refresh"));
                hints
            }
        };
        hints.join(" · ")
    }

    /// Render the status bar
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let bar_style = styles.style("status_bar");

        let hints = Self::hints(state);
        let hints_width = u16::try_from(hints.width() + 1).unwrap_or(u16::MAX);
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);

        let mut spans = vec![Span::styled(
            format!(" {} ", state.route().title()),
            bar_style.add_modifier(Modifier::BOLD),
        )];
        if state.is_loading() {
            spans.push(Span::raw(" Loading..."));
        }
        if let Some(message) = &state.system.status_message {
            let style = if message.starts_with("Error") {
                styles.style("error")
            } else {
                Style::default()
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(message.clone(), style));
        }

        frame.render_widget(Line::from(spans).style(bar_style), left);
        frame.render_widget(
            Line::from(format!("{hints} ")).style(bar_style).right_aligned(),
            right,
        );
    }
}

impl Default for StatusBarComponent {
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
    use crate::{core::state::remote::Remote, infrastructure::config::Config};

    fn state() -> AppState {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
        AppState::new(Config::defaults().expect("embedded config"), today)
    }

    fn row(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 1)).expect("terminal");
        terminal
            .draw(|frame| StatusBarComponent::new().view(state, frame, frame.area()))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        (0..120).map(|x| buffer[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_hints_follow_mode() {
        let mut state = state();
        assert_eq!(
            StatusBarComponent::hints(&state),
            "q quit · tab focus · r refresh"
        );

        state.nav.replace(Route::Courses);
        assert_eq!(
            StatusBarComponent::hints(&state),
            "q quit · tab focus · / search · n new · d delete · r refresh"
        );

        state.nav.replace(Route::CreateCourse);
        assert_eq!(
            StatusBarComponent::hints(&state),
            "tab next · ctrl-s submit · esc cancel"
        );
    }

    #[test]
    fn test_row_contents() {
        let mut state = state();
        state.dashboard.catalog = Remote::Loading;
        state.system.status_message = Some("Course created".into());
        let row = row(&state);
        assert!(row.starts_with(" Course Management Dashboard  Loading... Course created"));
        assert!(row.trim_end().ends_with("r refresh"));
    }
}

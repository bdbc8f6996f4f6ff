//! Page and chrome components
//!
//! Components are stateless renderers: each one reads `&AppState` and draws
//! into the area it is given. `Components::render` lays out the whole frame.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    core::state::{
        input::TextInput,
        nav::{Focus, Route},
        remote::Remote,
        AppState,
    },
    presentation::config::{keybindings::Action, styles::Styles},
};

pub mod confirm_dialog;
pub mod course_detail;
pub mod course_form;
pub mod course_list;
pub mod dashboard;
pub mod instance_detail;
pub mod instance_form;
pub mod instance_list;
pub mod sidebar;
pub mod status_bar;

pub use confirm_dialog::ConfirmDialogComponent;
pub use course_detail::CourseDetailComponent;
pub use course_form::CourseFormComponent;
pub use course_list::CourseListComponent;
pub use dashboard::DashboardComponent;
pub use instance_detail::InstanceDetailComponent;
pub use instance_form::InstanceFormComponent;
pub use instance_list::InstanceListComponent;
pub use sidebar::SidebarComponent;
pub use status_bar::StatusBarComponent;

pub const SIDEBAR_WIDTH: u16 = 24;

/// Collection of all components
#[derive(Debug)]
pub struct Components {
    pub sidebar: SidebarComponent,
    pub dashboard: DashboardComponent,
    pub course_list: CourseListComponent,
    pub course_detail: CourseDetailComponent,
    pub course_form: CourseFormComponent,
    pub instance_list: InstanceListComponent,
    pub instance_detail: InstanceDetailComponent,
    pub instance_form: InstanceFormComponent,
    pub status_bar: StatusBarComponent,
    pub confirm_dialog: ConfirmDialogComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            sidebar: SidebarComponent::new(),
            dashboard: DashboardComponent::new(),
            course_list: CourseListComponent::new(),
            course_detail: CourseDetailComponent::new(),
            course_form: CourseFormComponent::new(),
            instance_list: InstanceListComponent::new(),
            instance_detail: InstanceDetailComponent::new(),
            instance_form: InstanceFormComponent::new(),
            status_bar: StatusBarComponent::new(),
            confirm_dialog: ConfirmDialogComponent::new(),
        }
    }

    /// Sidebar on the left, the current page on the right, status bar below,
    /// and the confirm dialog on top when one is open.
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let [main, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
        let [sidebar, page] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(main);

        self.sidebar.view(state, frame, sidebar);
        self.render_page(state, frame, page);
        self.status_bar.view(state, frame, status);

        if state.dialog.is_some() {
            self.confirm_dialog.view(state, frame, frame.area());
        }
    }

    fn render_page(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let block = page_block(state, &state.route().title());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match state.route() {
            Route::Dashboard => self.dashboard.view(state, frame, inner),
            Route::Courses => self.course_list.view(state, frame, inner),
            Route::CourseDetail(_) => self.course_detail.view(state, frame, inner),
            Route::CreateCourse => self.course_form.view(state, frame, inner),
            Route::Instances => self.instance_list.view(state, frame, inner),
            Route::InstanceDetail { .. } => self.instance_detail.view(state, frame, inner),
            Route::CreateInstance { .. } => self.instance_form.view(state, frame, inner),
        }
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}

/// Rounded frame around the page, highlighted while the page has focus
pub fn page_block<'a>(state: &AppState, title: &str) -> Block<'a> {
    let styles = &state.config.config.styles;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Line::styled(format!(" {title} "), styles.style("title")));
    if state.nav.focus == Focus::Content {
        block.border_style(styles.style("border_focused"))
    } else {
        block
    }
}

/// Messages shown while a page has no data to draw
#[derive(Debug, Clone, Copy)]
pub struct Placeholder<'a> {
    pub loading: &'a str,
    pub not_found: &'a str,
}

/// Draws the loading, error and not-found states of `remote`.
/// Returns the data when it is loaded and leaves the area untouched.
pub fn render_remote<'r, T>(
    remote: &'r Remote<T>,
    placeholder: Placeholder<'_>,
    state: &AppState,
    frame: &mut Frame,
    area: Rect,
) -> Option<&'r T> {
    let styles = &state.config.config.styles;
    let lines = match remote {
        Remote::Loaded(data) => return Some(data),
        Remote::Idle | Remote::Loading => {
            vec![Line::styled(placeholder.loading.to_owned(), styles.style("muted"))]
        }
        Remote::NotFound => vec![
            Line::styled(placeholder.not_found.to_owned(), styles.style("title")),
            Line::default(),
            Line::styled(
                format!("Press {} to go back", key_hint(state, Action::Back, "esc")),
                styles.style("muted"),
            ),
        ],
        Remote::Failed(message) => vec![
            Line::styled(format!("Error: {message}"), styles.style("error")),
            Line::default(),
            Line::styled(
                format!("Press {} to retry", key_hint(state, Action::Refresh, "r")),
                styles.style("muted"),
            ),
        ],
    };
    render_centered(frame, area, lines);
    None
}

/// Vertically centred, wrapped message lines
pub fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).min(area.height);
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        middle,
    );
}

/// The key bound to `action`, or `fallback` when it is unbound
pub fn key_hint(state: &AppState, action: Action, fallback: &str) -> String {
    state
        .config
        .config
        .keybindings
        .describe(action)
        .map(|keys| keys.replace("><", " ").trim_matches(['<', '>']).to_owned())
        .unwrap_or_else(|| fallback.to_owned())
}

/// Bordered single-line input titled with its label. The terminal cursor
/// follows the text cursor while the field has focus.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &TextInput,
    focused: bool,
    styles: &Styles,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {label} "));
    if focused {
        block = block.border_style(styles.style("form_focused"));
    }
    let inner = block.inner(area);

    // scroll horizontally so the cursor stays inside the box
    let before: String = input.content.chars().take(input.cursor.column).collect();
    let cursor_x = u16::try_from(before.width()).unwrap_or(u16::MAX);
    let scroll = cursor_x.saturating_sub(inner.width.saturating_sub(1));

    frame.render_widget(
        Paragraph::new(input.value().to_owned())
            .block(block)
            .scroll((0, scroll)),
        area,
    );
    if focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position(Position::new(inner.x + (cursor_x - scroll), inner.y));
    }
}

/// `label: value` with the label muted
pub fn field_line(label: &str, value: impl Into<String>, styles: &Styles) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), styles.style("muted")),
        Span::raw(value.into()),
    ])
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::infrastructure::config::Config;

    fn state() -> AppState {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
        AppState::new(Config::defaults().expect("embedded config parses"), today)
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw_remote(remote: &Remote<u8>, state: &AppState) -> (Option<u8>, String) {
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).expect("terminal");
        let mut out = None;
        terminal
            .draw(|frame| {
                let placeholder = Placeholder {
                    loading: "Loading things...",
                    not_found: "Thing not found",
                };
                out = render_remote(remote, placeholder, state, frame, frame.area()).copied();
            })
            .expect("draw");
        (out, screen(&terminal))
    }

    #[test]
    fn test_render_remote_states() {
        let state = state();

        let (value, screen) = draw_remote(&Remote::Loading, &state);
        assert_eq!(value, None);
        assert!(screen.contains("Loading things..."));

        let (_, screen) = draw_remote(&Remote::Failed("Cannot connect".into()), &state);
        assert!(screen.contains("Error: Cannot connect"));
        assert!(screen.contains("Press r to retry"));

        let (_, screen) = draw_remote(&Remote::NotFound, &state);
        assert!(screen.contains("Thing not found"));

        let (value, screen) = draw_remote(&Remote::Loaded(7), &state);
        assert_eq!(value, Some(7));
        assert!(screen.trim().is_empty());
    }

    #[test]
    fn test_full_frame_layout() {
        let state = state();
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).expect("terminal");
        terminal
            .draw(|frame| Components::new().render(frame, &state))
            .expect("draw");
        let screen = screen(&terminal);
        assert!(screen.contains("Course Management Dashboard"));
        assert!(screen.contains("Create Instance"));
    }

    #[test]
    fn test_key_hint_falls_back() {
        let mut state = state();
        assert_eq!(key_hint(&state, Action::Refresh, "?"), "r");
        state.config.config.keybindings.clear();
        assert_eq!(key_hint(&state, Action::Refresh, "?"), "?");
    }
}

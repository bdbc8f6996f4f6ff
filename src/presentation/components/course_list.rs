use ratatui::{prelude::*, widgets::Block};
use tui_widget_list::{ListBuilder, ListView};

use crate::{
    core::state::AppState,
    presentation::{
        components::{key_hint, render_centered, render_remote, Placeholder},
        config::keybindings::Action,
        widgets::{course_card::CourseCard, search_bar::SearchBar},
    },
};

/// Course catalog: search box, match count and one card per course
#[derive(Debug, Clone)]
pub struct CourseListComponent;

impl CourseListComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn summary(state: &AppState) -> String {
        let visible = state.courses.visible().len();
        let total = state
            .courses
            .catalog
            .loaded()
            .map_or(0, |catalog| catalog.courses.len());
        if visible == total {
            format!("{total} courses")
        } else {
            format!("{visible} of {total} courses")
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let placeholder = Placeholder {
            loading: "Loading courses...",
            not_found: "No courses found",
        };
        let Some(catalog) = render_remote(&state.courses.catalog, placeholder, state, frame, area)
        else {
            return;
        };
        let styles = &state.config.config.styles;

        let [search_area, summary_area, list_area] = Layout::vertical([
            Constraint::Length(SearchBar::HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let search = SearchBar::new(&state.courses.search, "Search by title, ID or description")
            .focused_style(styles.style("form_focused"))
            .muted_style(styles.style("muted"));
        if let Some(position) = search.cursor_position(search_area) {
            frame.set_cursor_position(position);
        }
        frame.render_widget(search, search_area);
        frame.render_widget(
            Line::styled(Self::summary(state), styles.style("muted")),
            summary_area,
        );

        let courses = state.courses.visible();
        if courses.is_empty() {
            let lines = if catalog.courses.is_empty() {
                vec![
                    Line::styled("No courses yet", styles.style("title")),
                    Line::styled(
                        format!(
                            "Press {} to create the first course",
                            key_hint(state, Action::Create, "n")
                        ),
                        styles.style("muted"),
                    ),
                ]
            } else {
                vec![Line::styled(
                    format!("No courses match \"{}\"", state.courses.search.query()),
                    styles.style("muted"),
                )]
            };
            render_centered(frame, list_area, lines);
            return;
        }

        let today = state.today();
        let cards: Vec<(CourseCard, u16)> = courses
            .iter()
            .map(|course| {
                let card = CourseCard::new(
                    (*course).clone(),
                    catalog.instance_count(&course.course_id),
                    catalog.course_can_delete(&course.course_id, today),
                    styles,
                );
                let height = card.calculate_height(&list_area);
                (card, height)
            })
            .collect();
        let count = cards.len();

        let builder = ListBuilder::new(move |context| {
            let mut item = cards[context.index].clone();
            item.0.highlight = context.is_selected;
            (item.0, item.1)
        });

        let mut list_state = tui_widget_list::ListState::default();
        list_state.select(Some(state.courses.selected));

        let list = ListView::new(builder, count).block(Block::default());
        frame.render_stateful_widget(list, list_area, &mut list_state);
    }
}

impl Default for CourseListComponent {
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
        core::state::{input::TextInput, remote::Remote},
        domain::{catalog::Catalog, course::Course},
        infrastructure::config::Config,
    };

    fn state(courses: Vec<Course>) -> AppState {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
        let mut state = AppState::new(Config::defaults().expect("embedded config"), today);
        state.courses.catalog = Remote::Loaded(Catalog::new(courses, vec![]));
        state
    }

    fn screen(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).expect("terminal");
        terminal
            .draw(|frame| CourseListComponent::new().view(state, frame, frame.area()))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        (0..20)
            .map(|y| {
                (0..60)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_cards_and_summary() {
        let mut state = state(vec![
            Course::new("CS101", "Programming").with_description("Basics"),
            Course::new("MA110", "Calculus"),
        ]);
        let screen_all = screen(&state);
        assert!(screen_all.contains("CS101  Programming"));
        assert!(screen_all.contains("2 courses"));

        state.courses.search.input = TextInput::from("calc");
        assert_eq!(CourseListComponent::summary(&state), "1 of 2 courses");
        assert!(!screen(&state).contains("CS101"));
    }

    #[test]
    fn test_empty_states() {
        let empty = state(vec![]);
        assert!(screen(&empty).contains("Press n to create the first course"));

        let mut unmatched = state(vec![Course::new("CS101", "Programming")]);
        unmatched.courses.search.input = TextInput::from("zzz");
        assert!(screen(&unmatched).contains("No courses match \"zzz\""));
    }
}

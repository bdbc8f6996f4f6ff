use ratatui::{prelude::*, widgets::Block};
use tui_widget_list::{ListBuilder, ListView};

use crate::{
    core::state::{instance_list::InstanceListState, AppState},
    domain::term::semester_name,
    presentation::{
        components::{key_hint, render_centered, render_remote, Placeholder},
        config::keybindings::Action,
        widgets::{
            instance_card::{InstanceCard, INSTANCE_CARD_HEIGHT},
            search_bar::SearchBar,
        },
    },
};

/// Scheduled instances with search, year and semester filters
#[derive(Debug, Clone)]
pub struct InstanceListComponent;

impl InstanceListComponent {
    pub fn new() -> Self {
        Self
    }

    /// `Year: 2024  Semester: All`
    pub fn filter_line(list: &InstanceListState) -> String {
        let year = list
            .year
            .map_or_else(|| "All".to_owned(), |y| y.to_string());
        let semester = list.semester.map_or_else(|| "All".to_owned(), semester_name);
        format!("Year: {year}  Semester: {semester}")
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let list = &state.instances;

        let [search_area, filter_area, list_area] = Layout::vertical([
            Constraint::Length(SearchBar::HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let search = SearchBar::new(&list.search, "Search by course, ID or instructor")
            .focused_style(styles.style("form_focused"))
            .muted_style(styles.style("muted"));
        if let Some(position) = search.cursor_position(search_area) {
            frame.set_cursor_position(position);
        }
        frame.render_widget(search, search_area);

        let hints = format!(
            "  ({} year · {} semester · {} clear)",
            key_hint(state, Action::CycleYear, "y"),
            key_hint(state, Action::CycleSemester, "s"),
            key_hint(state, Action::ClearFilters, "x"),
        );
        frame.render_widget(
            Line::from(vec![
                Span::styled(Self::filter_line(list), styles.style("title")),
                Span::styled(hints, styles.style("muted")),
            ]),
            filter_area,
        );

        let placeholder = Placeholder {
            loading: "Loading instances...",
            not_found: "No instances found",
        };
        if render_remote(&list.instances, placeholder, state, frame, list_area).is_none() {
            return;
        }

        let visible = list.visible();
        if visible.is_empty() {
            let message = if list.filter().is_narrowed() {
                "No instances match the current filters"
            } else {
                "No instances scheduled yet"
            };
            render_centered(
                frame,
                list_area,
                vec![Line::styled(message, styles.style("muted"))],
            );
            return;
        }

        let today = state.today();
        let cards: Vec<InstanceCard> = visible
            .iter()
            .map(|instance| InstanceCard::new(instance, None, today, styles))
            .collect();
        let count = cards.len();

        let builder = ListBuilder::new(move |context| {
            let mut card = cards[context.index].clone();
            card.highlight = context.is_selected;
            (card, INSTANCE_CARD_HEIGHT)
        });

        let mut list_state = tui_widget_list::ListState::default();
        list_state.select(Some(list.selected));
        frame.render_stateful_widget(
            ListView::new(builder, count).block(Block::default()),
            list_area,
            &mut list_state,
        );
    }
}

impl Default for InstanceListComponent {
    fn default() -> Self {
        Self::new()
    }
}

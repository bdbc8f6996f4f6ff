use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use crate::{
    core::state::{dashboard::QuickAction, AppState},
    domain::{
        catalog::Catalog,
        stats::{recent_activity, DashboardStats},
        text::{ellipsize, format_count},
    },
    presentation::{
        components::{render_remote, Placeholder},
        config::styles::Styles,
    },
};

const STAT_HEIGHT: u16 = 4;

/// Landing page: four stat cards, quick actions and recent activity
#[derive(Debug, Clone)]
pub struct DashboardComponent;

impl DashboardComponent {
    pub fn new() -> Self {
        Self
    }

    /// Title, value and caption of each stat card
    pub fn stat_cards(stats: &DashboardStats) -> [(&'static str, String, String); 4] {
        let term = stats
            .current_term
            .map(|t| t.to_string())
            .unwrap_or_default();
        [
            (
                "Total Courses",
                format_count(stats.total_courses),
                "in catalog".to_owned(),
            ),
            (
                "Total Instances",
                format_count(stats.total_instances),
                "all terms".to_owned(),
            ),
            (
                "Total Capacity",
                format_count(stats.total_capacity),
                "student seats".to_owned(),
            ),
            (
                "Current Term",
                format_count(stats.current_term_instances),
                term,
            ),
        ]
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let placeholder = Placeholder {
            loading: "Loading dashboard...",
            not_found: "Nothing to show",
        };
        let Some(catalog) = render_remote(&state.dashboard.catalog, placeholder, state, frame, area)
        else {
            return;
        };

        let [stats, body] =
            Layout::vertical([Constraint::Length(STAT_HEIGHT), Constraint::Min(0)]).areas(area);
        let [actions, activity] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(body);

        self.render_stats(state, catalog, frame, stats);
        self.render_actions(state, frame, actions);
        self.render_activity(state, catalog, frame, activity);
    }

    fn render_stats(&self, state: &AppState, catalog: &Catalog, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let stats = DashboardStats::compute(&catalog.courses, &catalog.instances, state.today());
        let cells = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

        for ((title, value, caption), cell) in Self::stat_cards(&stats).into_iter().zip(cells.iter())
        {
            let width = usize::from(cell.width.saturating_sub(2));
            let card = Paragraph::new(vec![
                Line::styled(value, styles.style("stat_value")),
                Line::styled(ellipsize(&caption, width), styles.style("muted")),
            ])
            .block(card_block(title, styles));
            frame.render_widget(card, *cell);
        }
    }

    fn render_actions(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let mut lines = Vec::new();
        for (i, action) in QuickAction::iter().enumerate() {
            let selected = i == state.dashboard.selected_action;
            let (marker, style) = if selected {
                ("▶ ", styles.style("highlight"))
            } else {
                ("  ", styles.style("title"))
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(action.title(), style),
            ]));
            lines.push(Line::styled(
                format!("  {}", action.description()),
                styles.style("muted"),
            ));
        }
        frame.render_widget(
            Paragraph::new(lines).block(card_block("Quick Actions", styles)),
            area,
        );
    }

    fn render_activity(&self, state: &AppState, catalog: &Catalog, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let entries = recent_activity(&catalog.courses, &catalog.instances, state.today());
        let width = usize::from(area.width.saturating_sub(2));

        let lines: Vec<Line> = if entries.is_empty() {
            vec![Line::styled("No recent activity", styles.style("muted"))]
        } else {
            entries
                .iter()
                .flat_map(|entry| {
                    [
                        Line::styled(entry.action(), styles.style("success")),
                        Line::raw(ellipsize(&entry.details(), width)),
                        Line::styled(entry.note(), styles.style("muted")),
                    ]
                })
                .collect()
        };
        frame.render_widget(
            Paragraph::new(lines).block(card_block("Recent Activity", styles)),
            area,
        );
    }
}

impl Default for DashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn card_block<'a>(title: &'a str, styles: &Styles) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles.style("muted"))
        .title(Line::styled(format!(" {title} "), styles.style("title")))
}

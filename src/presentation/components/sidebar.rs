use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
};
use strum::IntoEnumIterator;

use crate::core::state::{
    nav::{Focus, NavItem},
    AppState,
};

/// Sidebar navigation
///
/// The entry for the current route is drawn in the active style. While the
/// sidebar has focus the cursor is shown as well.
#[derive(Debug, Clone)]
pub struct SidebarComponent;

impl SidebarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn labels() -> Vec<String> {
        NavItem::iter()
            .enumerate()
            .map(|(i, item)| format!("{} {item}", i + 1))
            .collect()
    }

    /// Render the sidebar
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let active = state.route().nav_item();
        let focused = state.nav.focus == Focus::Sidebar;

        let items: Vec<ListItem> = NavItem::iter()
            .zip(Self::labels())
            .map(|(item, label)| {
                let style = if item == active {
                    styles.style("sidebar_active")
                } else {
                    styles.style("sidebar_item")
                };
                ListItem::new(Line::styled(format!(" {label}"), style))
            })
            .collect();

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Line::styled(" Courseboard ", styles.style("title")));
        if focused {
            block = block.border_style(styles.style("border_focused"));
        }

        let list = List::new(items).block(block).highlight_symbol("▶");
        let mut list_state = ListState::default();
        if focused {
            list_state.select(Some(state.nav.sidebar_selected));
        }
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

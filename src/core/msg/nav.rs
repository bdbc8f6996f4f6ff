use crate::core::state::nav::Route;

/// Messages for moving between pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavMsg {
    Go(Route),
    Back,
    /// Fetch the current page's data again
    Refresh,
    ToggleFocus,
    SidebarUp,
    SidebarDown,
    SidebarOpen,
}

//! Messages handled by the list and detail pages

use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardMsg {
    SelectNext,
    SelectPrev,
    OpenSelected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseListMsg {
    SelectNext,
    SelectPrev,
    OpenSelected,
    StartSearch,
    SearchKey(KeyEvent),
    EndSearch,
    ClearSearch,
    RequestDelete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseDetailMsg {
    SelectNext,
    SelectPrev,
    OpenSelected,
    RequestDelete,
    CreateInstance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceListMsg {
    SelectNext,
    SelectPrev,
    OpenSelected,
    StartSearch,
    SearchKey(KeyEvent),
    EndSearch,
    ClearSearch,
    CycleYear,
    CycleSemester,
    ClearFilters,
    RequestDelete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceDetailMsg {
    SelectNext,
    SelectPrev,
    RequestDelete,
}

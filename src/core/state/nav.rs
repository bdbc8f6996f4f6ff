use std::mem;

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    core::{cmd::Cmd, msg::nav::NavMsg},
    domain::term::Term,
};

const HISTORY_LIMIT: usize = 32;

/// The page being shown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Courses,
    CourseDetail(String),
    CreateCourse,
    Instances,
    InstanceDetail {
        term: Term,
        course_id: String,
    },
    CreateInstance {
        course_id: Option<String>,
    },
}

impl Route {
    pub fn title(&self) -> String {
        match self {
            Route::Dashboard => "Course Management Dashboard".to_owned(),
            Route::Courses => "Course Catalog".to_owned(),
            Route::CourseDetail(id) => format!("Course {id}"),
            Route::CreateCourse => "Create New Course".to_owned(),
            Route::Instances => "Course Instances".to_owned(),
            Route::InstanceDetail { term, course_id } => format!("{course_id} · {term}"),
            Route::CreateInstance { .. } => "Create Course Instance".to_owned(),
        }
    }

    /// Sidebar entry highlighted while this route is shown
    pub fn nav_item(&self) -> NavItem {
        match self {
            Route::Dashboard => NavItem::Dashboard,
            Route::Courses | Route::CourseDetail(_) => NavItem::Courses,
            Route::CreateCourse => NavItem::CreateCourse,
            Route::Instances | Route::InstanceDetail { .. } => NavItem::Instances,
            Route::CreateInstance { .. } => NavItem::CreateInstance,
        }
    }

    /// Where "back" leads when there is no history
    pub fn parent(&self) -> Route {
        match self {
            Route::Dashboard | Route::Courses | Route::Instances => Route::Dashboard,
            Route::CourseDetail(_) | Route::CreateCourse => Route::Courses,
            Route::InstanceDetail { .. } | Route::CreateInstance { .. } => Route::Instances,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum NavItem {
    Dashboard,
    Courses,
    #[strum(to_string = "Create Course")]
    CreateCourse,
    Instances,
    #[strum(to_string = "Create Instance")]
    CreateInstance,
}

impl NavItem {
    pub fn route(self) -> Route {
        match self {
            NavItem::Dashboard => Route::Dashboard,
            NavItem::Courses => Route::Courses,
            NavItem::CreateCourse => Route::CreateCourse,
            NavItem::Instances => Route::Instances,
            NavItem::CreateInstance => Route::CreateInstance { course_id: None },
        }
    }

    pub fn index(self) -> usize {
        NavItem::iter().position(|item| item == self).unwrap_or(0)
    }

    pub fn at(index: usize) -> Option<NavItem> {
        NavItem::iter().nth(index)
    }

    pub fn count() -> usize {
        NavItem::iter().count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Sidebar,
    #[default]
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    pub route: Route,
    pub history: Vec<Route>,
    pub focus: Focus,
    pub sidebar_selected: usize,
}

impl NavState {
    /// Moves to `route`, remembering the current one. Returns false when already there.
    pub fn push(&mut self, route: Route) -> bool {
        if self.route == route {
            return false;
        }
        let previous = mem::replace(&mut self.route, route);
        self.history.push(previous);
        if self.history.len() > HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.after_move();
        true
    }

    /// Goes back one step, or to the parent page when history is empty
    pub fn pop(&mut self) -> Route {
        let target = self.history.pop().unwrap_or_else(|| self.route.parent());
        self.route = target.clone();
        self.after_move();
        target
    }

    /// Replaces the current route without recording it
    pub fn replace(&mut self, route: Route) {
        self.route = route;
        self.after_move();
    }

    fn after_move(&mut self) {
        self.sidebar_selected = self.route.nav_item().index();
        self.focus = Focus::Content;
    }

    pub fn selected_item(&self) -> Option<NavItem> {
        NavItem::at(self.sidebar_selected)
    }

    /// Sidebar-local messages; navigation itself is handled by `update`
    pub fn update(&mut self, msg: NavMsg) -> Vec<Cmd> {
        match msg {
            NavMsg::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Sidebar => Focus::Content,
                    Focus::Content => Focus::Sidebar,
                };
            }
            NavMsg::SidebarUp => {
                let count = NavItem::count();
                self.sidebar_selected = (self.sidebar_selected + count - 1) % count;
            }
            NavMsg::SidebarDown => {
                self.sidebar_selected = (self.sidebar_selected + 1) % NavItem::count();
            }
            NavMsg::Go(_) | NavMsg::Back | NavMsg::Refresh | NavMsg::SidebarOpen => {}
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_push_and_pop() {
        let mut nav = NavState::default();
        assert!(nav.push(Route::Courses));
        assert!(nav.push(Route::CourseDetail("CS101".into())));
        assert!(!nav.push(Route::CourseDetail("CS101".into())));
        assert_eq!(nav.history, vec![Route::Dashboard, Route::Courses]);

        assert_eq!(nav.pop(), Route::Courses);
        assert_eq!(nav.pop(), Route::Dashboard);
        // empty history falls back to the parent
        assert_eq!(nav.pop(), Route::Dashboard);
    }

    #[test]
    fn test_pop_without_history_goes_to_parent() {
        let mut nav = NavState::default();
        nav.replace(Route::CreateInstance { course_id: None });
        assert_eq!(nav.pop(), Route::Instances);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut nav = NavState::default();
        for i in 0..(HISTORY_LIMIT + 10) {
            nav.push(Route::CourseDetail(format!("CS{i}")));
        }
        assert_eq!(nav.history.len(), HISTORY_LIMIT);
    }

    #[test]
    fn test_sidebar_follows_route() {
        let mut nav = NavState::default();
        nav.push(Route::InstanceDetail {
            term: Term::new(2024, 1),
            course_id: "CS101".into(),
        });
        assert_eq!(nav.selected_item(), Some(NavItem::Instances));
    }

    #[test]
    fn test_sidebar_wraps() {
        let mut nav = NavState::default();
        nav.update(NavMsg::SidebarUp);
        assert_eq!(nav.selected_item(), Some(NavItem::CreateInstance));
        nav.update(NavMsg::SidebarDown);
        assert_eq!(nav.selected_item(), Some(NavItem::Dashboard));
    }

    #[test]
    fn test_toggle_focus() {
        let mut nav = NavState::default();
        nav.update(NavMsg::ToggleFocus);
        assert_eq!(nav.focus, Focus::Sidebar);
        nav.push(Route::Courses);
        assert_eq!(nav.focus, Focus::Content);
    }

    #[test]
    fn test_nav_item_labels() {
        assert_eq!(NavItem::CreateCourse.to_string(), "Create Course");
        assert_eq!(NavItem::count(), 5);
    }
}

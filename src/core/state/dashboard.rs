use strum::{EnumIter, IntoEnumIterator};

use crate::{
    core::{
        cmd::Cmd,
        msg::pages::DashboardMsg,
        state::{nav::Route, remote::Remote, selection},
    },
    domain::catalog::Catalog,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum QuickAction {
    CreateCourse,
    ViewCourses,
    CourseInstances,
    CreateInstance,
}

impl QuickAction {
    pub fn title(self) -> &'static str {
        match self {
            QuickAction::CreateCourse => "Create Course",
            QuickAction::ViewCourses => "View Courses",
            QuickAction::CourseInstances => "Course Instances",
            QuickAction::CreateInstance => "Create Instance",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            QuickAction::CreateCourse => "Add a new course to catalog",
            QuickAction::ViewCourses => "Browse course catalog",
            QuickAction::CourseInstances => "Manage deliveries",
            QuickAction::CreateInstance => "Schedule new delivery",
        }
    }

    pub fn route(self) -> Route {
        match self {
            QuickAction::CreateCourse => Route::CreateCourse,
            QuickAction::ViewCourses => Route::Courses,
            QuickAction::CourseInstances => Route::Instances,
            QuickAction::CreateInstance => Route::CreateInstance { course_id: None },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub catalog: Remote<Catalog>,
    pub selected_action: usize,
}

impl DashboardState {
    pub fn selected(&self) -> Option<QuickAction> {
        QuickAction::iter().nth(self.selected_action)
    }

    pub fn update(&mut self, msg: DashboardMsg) -> Vec<Cmd> {
        match msg {
            DashboardMsg::SelectNext => {
                self.selected_action =
                    selection::next(self.selected_action, QuickAction::iter().count());
            }
            DashboardMsg::SelectPrev => {
                self.selected_action = selection::prev(self.selected_action);
            }
            DashboardMsg::OpenSelected => {}
        }
        vec![]
    }
}

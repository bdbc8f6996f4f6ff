pub mod course_detail;
pub mod course_form;
pub mod course_list;
pub mod dashboard;
pub mod dialog;
pub mod input;
pub mod instance_detail;
pub mod instance_form;
pub mod instance_list;
pub mod nav;
pub mod remote;
pub mod requests;
pub mod selection;
pub mod system;

use chrono::NaiveDate;

use crate::infrastructure::config::Config;
use course_detail::CourseDetailState;
use course_form::CourseFormState;
use course_list::CourseListState;
use dashboard::DashboardState;
use dialog::ConfirmDialog;
use instance_detail::InstanceDetailState;
use instance_form::InstanceFormState;
use instance_list::InstanceListState;
use nav::{Focus, NavState, Route};
use requests::RequestTracker;
use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub system: SystemState,
    pub nav: NavState,
    pub dashboard: DashboardState,
    pub courses: CourseListState,
    pub course_detail: CourseDetailState,
    pub course_form: CourseFormState,
    pub instances: InstanceListState,
    pub instance_detail: InstanceDetailState,
    pub instance_form: InstanceFormState,
    /// Open while a delete waits for confirmation
    pub dialog: Option<ConfirmDialog>,
    pub requests: RequestTracker,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

/// How key presses are interpreted right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keybindings apply
    Normal,
    /// Keys go to a list's search box
    Search,
    /// Keys go to the focused form field
    Form,
    /// Only confirm and cancel are accepted
    Dialog,
}

impl AppState {
    pub fn new(config: Config, today: NaiveDate) -> Self {
        Self {
            system: SystemState::new(today),
            instance_form: InstanceFormState::new(None, today),
            config: ConfigState { config },
            ..Default::default()
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.system.today
    }

    pub fn route(&self) -> &Route {
        &self.nav.route
    }

    pub fn input_mode(&self) -> InputMode {
        if self.dialog.is_some() {
            return InputMode::Dialog;
        }
        if self.nav.focus == Focus::Sidebar {
            return InputMode::Normal;
        }
        match self.nav.route {
            Route::Courses if self.courses.search.editing => InputMode::Search,
            Route::Instances if self.instances.search.editing => InputMode::Search,
            Route::CreateCourse | Route::CreateInstance { .. } => InputMode::Form,
            _ => InputMode::Normal,
        }
    }

    /// True when typed characters land in a text box rather than driving a control
    pub fn accepts_text(&self) -> bool {
        match self.input_mode() {
            InputMode::Search => true,
            InputMode::Form => match self.nav.route {
                Route::CreateCourse => self.course_form.focus.is_text(),
                Route::CreateInstance { .. } => self.instance_form.focus.is_text(),
                _ => false,
            },
            InputMode::Normal | InputMode::Dialog => false,
        }
    }

    /// True while the page being shown waits for its data
    pub fn is_loading(&self) -> bool {
        match self.nav.route {
            Route::Dashboard => self.dashboard.catalog.is_loading(),
            Route::Courses => self.courses.catalog.is_loading(),
            Route::CourseDetail(_) => self.course_detail.detail.is_loading(),
            Route::CreateCourse => self.course_form.options.is_loading(),
            Route::Instances => self.instances.instances.is_loading(),
            Route::InstanceDetail { .. } => self.instance_detail.instance.is_loading(),
            Route::CreateInstance { .. } => self.instance_form.options.is_loading(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{course_form::CourseField, instance_form::InstanceField, *};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
    }

    #[test]
    fn test_app_state_new() {
        let state = AppState::new(Config::default(), today());
        assert_eq!(state.today(), today());
        assert_eq!(state.route(), &Route::Dashboard);
        assert!(!state.system.should_quit);
        assert!(state.requests.is_empty());
        assert_eq!(state.instance_form.years.first(), Some(&2024));
    }

    #[test]
    fn test_input_mode() {
        let mut state = AppState::new(Config::default(), today());
        assert_eq!(state.input_mode(), InputMode::Normal);

        state.nav.replace(Route::Courses);
        state.courses.search.editing = true;
        assert_eq!(state.input_mode(), InputMode::Search);

        state.nav.replace(Route::CreateCourse);
        assert_eq!(state.input_mode(), InputMode::Form);

        state.nav.focus = Focus::Sidebar;
        assert_eq!(state.input_mode(), InputMode::Normal);

        state.dialog = Some(ConfirmDialog::new(dialog::PendingDelete::Course {
            course_id: "CS101".into(),
            title: "Programming".into(),
        }));
        assert_eq!(state.input_mode(), InputMode::Dialog);
    }

    #[test]
    fn test_accepts_text_only_in_text_fields() {
        let mut state = AppState::new(Config::default(), today());
        assert!(!state.accepts_text());

        state.nav.replace(Route::CreateInstance { course_id: None });
        state.instance_form.focus = InstanceField::Instructor;
        assert!(state.accepts_text());
        state.instance_form.focus = InstanceField::Year;
        assert!(!state.accepts_text());

        state.nav.replace(Route::CreateCourse);
        state.course_form.focus = CourseField::Title;
        assert!(state.accepts_text());
        state.course_form.focus = CourseField::Prerequisites;
        assert!(!state.accepts_text());
    }
}

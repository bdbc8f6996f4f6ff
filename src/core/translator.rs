use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{
            dialog::DialogMsg,
            form::{CourseFormMsg, InstanceFormMsg},
            nav::NavMsg,
            pages::{
                CourseDetailMsg, CourseListMsg, DashboardMsg, InstanceDetailMsg, InstanceListMsg,
            },
            system::SystemMsg,
            Msg,
        },
        raw_msg::RawMsg,
        state::{
            course_form::CourseField,
            instance_form::InstanceField,
            nav::{Focus, NavItem, Route},
            AppState, InputMode,
        },
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Today(date) => vec![Msg::System(SystemMsg::SetToday(date))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::Api(reply) => vec![Msg::Api(reply)],

        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c) && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    if is_ctrl(&key, 'c') {
        return vec![Msg::System(SystemMsg::Quit)];
    }
    if is_ctrl(&key, 'z') {
        return vec![Msg::System(SystemMsg::Suspend)];
    }

    match state.input_mode() {
        InputMode::Dialog => translate_dialog_keys(key),
        InputMode::Search => translate_search_keys(key, state),
        InputMode::Form => translate_form_keys(key, state),
        InputMode::Normal => translate_normal_mode_keys(key, state),
    }
}

fn translate_dialog_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            vec![Msg::Dialog(DialogMsg::Confirm)]
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            vec![Msg::Dialog(DialogMsg::Cancel)]
        }
        _ => vec![],
    }
}

/// Keys while a list's search box is being edited
fn translate_search_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let instances = matches!(state.nav.route, Route::Instances);
    let msg = match key.code {
        KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
            if instances {
                Msg::InstanceList(InstanceListMsg::EndSearch)
            } else {
                Msg::CourseList(CourseListMsg::EndSearch)
            }
        }
        KeyCode::Esc => {
            if instances {
                return vec![
                    Msg::InstanceList(InstanceListMsg::ClearSearch),
                    Msg::InstanceList(InstanceListMsg::EndSearch),
                ];
            }
            return vec![
                Msg::CourseList(CourseListMsg::ClearSearch),
                Msg::CourseList(CourseListMsg::EndSearch),
            ];
        }
        _ => {
            if instances {
                Msg::InstanceList(InstanceListMsg::SearchKey(key))
            } else {
                Msg::CourseList(CourseListMsg::SearchKey(key))
            }
        }
    };
    vec![msg]
}

/// Keys while a create form has focus
fn translate_form_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if is_ctrl(&key, 's') {
        return vec![submit_msg(state)];
    }
    match key.code {
        KeyCode::Esc => return vec![Msg::Nav(NavMsg::Back)],
        KeyCode::Tab => return vec![form_msg(state, FormNav::Next)],
        KeyCode::BackTab => return vec![form_msg(state, FormNav::Prev)],
        _ => {}
    }

    match &state.nav.route {
        Route::CreateCourse => translate_course_form_keys(key, state.course_form.focus),
        Route::CreateInstance { .. } => {
            translate_instance_form_keys(key, state.instance_form.focus)
        }
        _ => vec![],
    }
}

enum FormNav {
    Next,
    Prev,
}

fn form_msg(state: &AppState, nav: FormNav) -> Msg {
    match (&state.nav.route, nav) {
        (Route::CreateInstance { .. }, FormNav::Next) => {
            Msg::InstanceForm(InstanceFormMsg::NextField)
        }
        (Route::CreateInstance { .. }, FormNav::Prev) => {
            Msg::InstanceForm(InstanceFormMsg::PrevField)
        }
        (_, FormNav::Next) => Msg::CourseForm(CourseFormMsg::NextField),
        (_, FormNav::Prev) => Msg::CourseForm(CourseFormMsg::PrevField),
    }
}

fn submit_msg(state: &AppState) -> Msg {
    match state.nav.route {
        Route::CreateInstance { .. } => Msg::InstanceForm(InstanceFormMsg::Submit),
        _ => Msg::CourseForm(CourseFormMsg::Submit),
    }
}

fn translate_course_form_keys(key: KeyEvent, focus: CourseField) -> Vec<Msg> {
    let msg = match focus {
        CourseField::Submit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => CourseFormMsg::Submit,
            KeyCode::Up => CourseFormMsg::PrevField,
            KeyCode::Down => CourseFormMsg::NextField,
            _ => return vec![],
        },
        CourseField::Prerequisites => match key.code {
            KeyCode::Up | KeyCode::Char('k') => CourseFormMsg::OptionPrev,
            KeyCode::Down | KeyCode::Char('j') => CourseFormMsg::OptionNext,
            KeyCode::Char(' ') | KeyCode::Enter => CourseFormMsg::ToggleOption,
            _ => return vec![],
        },
        _ => match key.code {
            KeyCode::Enter | KeyCode::Down => CourseFormMsg::NextField,
            KeyCode::Up => CourseFormMsg::PrevField,
            _ => CourseFormMsg::Edit(key),
        },
    };
    vec![Msg::CourseForm(msg)]
}

fn translate_instance_form_keys(key: KeyEvent, focus: InstanceField) -> Vec<Msg> {
    let msg = if focus == InstanceField::Submit {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => InstanceFormMsg::Submit,
            KeyCode::Up => InstanceFormMsg::PrevField,
            KeyCode::Down => InstanceFormMsg::NextField,
            _ => return vec![],
        }
    } else if focus.is_choice() {
        match key.code {
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
                InstanceFormMsg::ChoicePrev
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
                InstanceFormMsg::ChoiceNext
            }
            KeyCode::Enter => InstanceFormMsg::NextField,
            _ => return vec![],
        }
    } else {
        match key.code {
            KeyCode::Enter | KeyCode::Down => InstanceFormMsg::NextField,
            KeyCode::Up => InstanceFormMsg::PrevField,
            _ => InstanceFormMsg::Edit(key),
        }
    };
    vec![Msg::InstanceForm(msg)]
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Get keybindings from config state (flat mapping)
    match state.config.config.keybindings.action_for(key) {
        Some(action) => translate_action_to_msg(action, state),
        None => vec![],
    }
}

fn go(route: Route) -> Vec<Msg> {
    vec![Msg::Nav(NavMsg::Go(route))]
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => return vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => return vec![Msg::System(SystemMsg::Suspend)],
        Action::ToggleFocus => return vec![Msg::Nav(NavMsg::ToggleFocus)],
        Action::Refresh => return vec![Msg::Nav(NavMsg::Refresh)],
        Action::GoDashboard => return go(NavItem::Dashboard.route()),
        Action::GoCourses => return go(NavItem::Courses.route()),
        Action::GoCreateCourse => return go(NavItem::CreateCourse.route()),
        Action::GoInstances => return go(NavItem::Instances.route()),
        Action::GoCreateInstance => return go(NavItem::CreateInstance.route()),
        _ => {}
    }

    if state.nav.focus == Focus::Sidebar {
        return match action {
            Action::Up => vec![Msg::Nav(NavMsg::SidebarUp)],
            Action::Down => vec![Msg::Nav(NavMsg::SidebarDown)],
            Action::Open => vec![Msg::Nav(NavMsg::SidebarOpen)],
            Action::Back => vec![Msg::Nav(NavMsg::ToggleFocus)],
            _ => vec![],
        };
    }

    if action == Action::Back {
        return match state.nav.route {
            Route::Dashboard => vec![],
            _ => vec![Msg::Nav(NavMsg::Back)],
        };
    }

    let msg = match (&state.nav.route, action) {
        (Route::Dashboard, Action::Up) => Msg::Dashboard(DashboardMsg::SelectPrev),
        (Route::Dashboard, Action::Down) => Msg::Dashboard(DashboardMsg::SelectNext),
        (Route::Dashboard, Action::Open) => Msg::Dashboard(DashboardMsg::OpenSelected),

        (Route::Courses, Action::Up) => Msg::CourseList(CourseListMsg::SelectPrev),
        (Route::Courses, Action::Down) => Msg::CourseList(CourseListMsg::SelectNext),
        (Route::Courses, Action::Open) => Msg::CourseList(CourseListMsg::OpenSelected),
        (Route::Courses, Action::Search) => Msg::CourseList(CourseListMsg::StartSearch),
        (Route::Courses, Action::Delete) => Msg::CourseList(CourseListMsg::RequestDelete),
        (Route::Courses, Action::Create) => Msg::Nav(NavMsg::Go(Route::CreateCourse)),
        (Route::Courses, Action::ClearFilters) => Msg::CourseList(CourseListMsg::ClearSearch),

        (Route::CourseDetail(_), Action::Up) => Msg::CourseDetail(CourseDetailMsg::SelectPrev),
        (Route::CourseDetail(_), Action::Down) => Msg::CourseDetail(CourseDetailMsg::SelectNext),
        (Route::CourseDetail(_), Action::Open) => {
            Msg::CourseDetail(CourseDetailMsg::OpenSelected)
        }
        (Route::CourseDetail(_), Action::Delete) => {
            Msg::CourseDetail(CourseDetailMsg::RequestDelete)
        }
        (Route::CourseDetail(_), Action::Create) => {
            Msg::CourseDetail(CourseDetailMsg::CreateInstance)
        }

        (Route::Instances, Action::Up) => Msg::InstanceList(InstanceListMsg::SelectPrev),
        (Route::Instances, Action::Down) => Msg::InstanceList(InstanceListMsg::SelectNext),
        (Route::Instances, Action::Open) => Msg::InstanceList(InstanceListMsg::OpenSelected),
        (Route::Instances, Action::Search) => Msg::InstanceList(InstanceListMsg::StartSearch),
        (Route::Instances, Action::Delete) => Msg::InstanceList(InstanceListMsg::RequestDelete),
        (Route::Instances, Action::CycleYear) => Msg::InstanceList(InstanceListMsg::CycleYear),
        (Route::Instances, Action::CycleSemester) => {
            Msg::InstanceList(InstanceListMsg::CycleSemester)
        }
        (Route::Instances, Action::ClearFilters) => {
            Msg::InstanceList(InstanceListMsg::ClearFilters)
        }
        (Route::Instances, Action::Create) => {
            Msg::Nav(NavMsg::Go(Route::CreateInstance { course_id: None }))
        }

        (Route::InstanceDetail { .. }, Action::Up) => {
            Msg::InstanceDetail(InstanceDetailMsg::SelectPrev)
        }
        (Route::InstanceDetail { .. }, Action::Down) => {
            Msg::InstanceDetail(InstanceDetailMsg::SelectNext)
        }
        (Route::InstanceDetail { .. }, Action::Delete) => {
            Msg::InstanceDetail(InstanceDetailMsg::RequestDelete)
        }

        (Route::CreateCourse | Route::CreateInstance { .. }, Action::Submit) => submit_msg(state),

        _ => return vec![],
    };
    vec![msg]
}

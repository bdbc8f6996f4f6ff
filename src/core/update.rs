use crate::{
    core::{
        api::{ApiFailure, ApiPayload, ApiReply, Endpoint},
        cmd::Cmd,
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
        state::{
            course_detail::{CourseDetailState, DetailEntry},
            course_form::CourseFormState,
            course_list::CourseListState,
            dialog::{ConfirmDialog, PendingDelete},
            instance_detail::InstanceDetailState,
            instance_form::InstanceFormState,
            instance_list::InstanceListState,
            nav::Route,
            remote::Remote,
            requests::RequestTarget,
            AppState,
        },
        textarea_engine::{NoopTextAreaEngine, TextAreaEngine},
    },
    domain::{
        instance::CourseInstance,
        term::{schedulable_years, Term},
    },
};

const COURSE_NOT_DELETABLE: &str = "Course has dependencies or active instances";
const INSTANCE_NOT_DELETABLE: &str = "Instance has enrolled students or is currently active";

/// Collaborators the pure update path may call into
pub struct UpdateContext<'a> {
    pub text_area: &'a dyn TextAreaEngine,
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    update_with_context(
        msg,
        state,
        &UpdateContext {
            text_area: &NoopTextAreaEngine,
        },
    )
}

pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    let commands = match msg {
        Msg::System(system_msg) => {
            if let SystemMsg::SetToday(today) = &system_msg {
                state.instance_form.years = schedulable_years(*today);
            }
            state.system.update(system_msg)
        }
        Msg::Nav(nav_msg) => update_nav(nav_msg, &mut state),
        Msg::Dashboard(msg) => update_dashboard(msg, &mut state),
        Msg::CourseList(msg) => update_course_list(msg, &mut state, ctx),
        Msg::CourseDetail(msg) => update_course_detail(msg, &mut state),
        Msg::InstanceList(msg) => update_instance_list(msg, &mut state, ctx),
        Msg::InstanceDetail(msg) => update_instance_detail(msg, &mut state),
        Msg::CourseForm(msg) => update_course_form(msg, &mut state, ctx),
        Msg::InstanceForm(msg) => update_instance_form(msg, &mut state, ctx),
        Msg::Dialog(msg) => update_dialog(msg, &mut state),
        Msg::Api(reply) => handle_reply(reply, &mut state),
    };
    (state, commands)
}

/// Moves to `route` and starts loading its data
pub fn navigate(state: &mut AppState, route: Route) -> Vec<Cmd> {
    if !state.nav.push(route) {
        return vec![];
    }
    enter_route(state)
}

/// Like `navigate`, but the page being left is not kept in history
fn redirect(state: &mut AppState, route: Route) -> Vec<Cmd> {
    state.nav.replace(route);
    enter_route(state)
}

/// Resets the slice of the page just entered and mounts it
fn enter_route(state: &mut AppState) -> Vec<Cmd> {
    state.requests.forget_loads();
    state.dialog = None;
    match state.nav.route.clone() {
        Route::Dashboard => {}
        Route::Courses => state.courses = CourseListState::default(),
        Route::CourseDetail(course_id) => state.course_detail = CourseDetailState::new(course_id),
        Route::CreateCourse => state.course_form = CourseFormState::default(),
        Route::Instances => state.instances = InstanceListState::default(),
        Route::InstanceDetail { term, course_id } => {
            state.instance_detail = InstanceDetailState::new(term, course_id);
        }
        Route::CreateInstance { course_id } => {
            state.instance_form = InstanceFormState::new(course_id, state.today());
        }
    }
    load_current(state)
}

/// Fetches the data of the current page, superseding any load in flight
pub fn load_current(state: &mut AppState) -> Vec<Cmd> {
    let (target, endpoint) = match state.nav.route.clone() {
        Route::Dashboard => {
            state.dashboard.catalog = Remote::Loading;
            (RequestTarget::Dashboard, Endpoint::Catalog)
        }
        Route::Courses => {
            state.courses.catalog = Remote::Loading;
            (RequestTarget::CourseList, Endpoint::Catalog)
        }
        Route::CourseDetail(course_id) => {
            state.course_detail.detail = Remote::Loading;
            (
                RequestTarget::CourseDetail,
                Endpoint::CourseDetail { course_id },
            )
        }
        Route::CreateCourse => {
            state.course_form.options = Remote::Loading;
            (RequestTarget::CourseFormOptions, Endpoint::Courses)
        }
        Route::Instances => {
            state.instances.instances = Remote::Loading;
            (RequestTarget::InstanceList, state.instances.endpoint())
        }
        Route::InstanceDetail { term, course_id } => {
            state.instance_detail.instance = Remote::Loading;
            (
                RequestTarget::InstanceDetail,
                Endpoint::Instance { term, course_id },
            )
        }
        Route::CreateInstance { .. } => {
            state.instance_form.options = Remote::Loading;
            (RequestTarget::InstanceFormOptions, Endpoint::Courses)
        }
    };
    let id = state.requests.begin_load(target);
    vec![Cmd::api(id, endpoint), Cmd::RequestRender]
}

fn update_nav(msg: NavMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        NavMsg::Go(route) => navigate(state, route),
        NavMsg::Back => {
            state.nav.pop();
            enter_route(state)
        }
        NavMsg::Refresh => load_current(state),
        NavMsg::SidebarOpen => match state.nav.selected_item() {
            Some(item) => navigate(state, item.route()),
            None => vec![],
        },
        NavMsg::ToggleFocus | NavMsg::SidebarUp | NavMsg::SidebarDown => state.nav.update(msg),
    }
}

fn update_dashboard(msg: DashboardMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        DashboardMsg::OpenSelected => match state.dashboard.selected() {
            Some(action) => navigate(state, action.route()),
            None => vec![],
        },
        other => state.dashboard.update(other),
    }
}

fn update_course_list(
    msg: CourseListMsg,
    state: &mut AppState,
    ctx: &UpdateContext<'_>,
) -> Vec<Cmd> {
    match msg {
        CourseListMsg::OpenSelected => match state.courses.selected_course() {
            Some(course) => {
                let route = Route::CourseDetail(course.course_id.clone());
                navigate(state, route)
            }
            None => vec![],
        },
        CourseListMsg::RequestDelete => {
            let today = state.today();
            let target = state.courses.selected_course().map(|course| {
                let deletable = state
                    .courses
                    .catalog
                    .loaded()
                    .is_some_and(|c| c.course_can_delete(&course.course_id, today));
                (
                    deletable,
                    PendingDelete::Course {
                        course_id: course.course_id.clone(),
                        title: course.title.clone(),
                    },
                )
            });
            request_delete(state, target, COURSE_NOT_DELETABLE)
        }
        other => state.courses.update(other, ctx),
    }
}

fn update_course_detail(msg: CourseDetailMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        CourseDetailMsg::OpenSelected => {
            let route = match state.course_detail.selected_entry() {
                Some(DetailEntry::Course(course)) => Route::CourseDetail(course.course_id.clone()),
                Some(DetailEntry::Instance(instance)) => instance_route(instance),
                None => return vec![],
            };
            navigate(state, route)
        }
        CourseDetailMsg::CreateInstance => {
            let course_id = state.course_detail.course_id.clone();
            navigate(
                state,
                Route::CreateInstance {
                    course_id: Some(course_id),
                },
            )
        }
        CourseDetailMsg::RequestDelete => {
            let deletable = state.course_detail.can_delete(state.today());
            let target = state.course_detail.detail.loaded().map(|detail| {
                (
                    deletable,
                    PendingDelete::Course {
                        course_id: detail.course.course_id.clone(),
                        title: detail.course.title.clone(),
                    },
                )
            });
            request_delete(state, target, COURSE_NOT_DELETABLE)
        }
        other => state.course_detail.update(other),
    }
}

fn update_instance_list(
    msg: InstanceListMsg,
    state: &mut AppState,
    ctx: &UpdateContext<'_>,
) -> Vec<Cmd> {
    match msg {
        InstanceListMsg::OpenSelected => match state.instances.selected_instance() {
            Some(instance) => {
                let route = instance_route(instance);
                navigate(state, route)
            }
            None => vec![],
        },
        InstanceListMsg::RequestDelete => {
            let today = state.today();
            let target = state
                .instances
                .selected_instance()
                .map(|instance| (instance.can_delete(today), pending_instance_delete(instance)));
            request_delete(state, target, INSTANCE_NOT_DELETABLE)
        }
        other => {
            let refetch = InstanceListState::refetches(&other);
            let mut cmds = state.instances.update(other, ctx);
            if refetch {
                cmds.extend(load_current(state));
            }
            cmds
        }
    }
}

fn update_instance_detail(msg: InstanceDetailMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        InstanceDetailMsg::RequestDelete => {
            let today = state.today();
            let target = state
                .instance_detail
                .instance
                .loaded()
                .map(|instance| (instance.can_delete(today), pending_instance_delete(instance)));
            request_delete(state, target, INSTANCE_NOT_DELETABLE)
        }
        other => state.instance_detail.update(other),
    }
}

fn instance_route(instance: &CourseInstance) -> Route {
    Route::InstanceDetail {
        term: instance.term(),
        course_id: instance.course_id().to_owned(),
    }
}

fn pending_instance_delete(instance: &CourseInstance) -> PendingDelete {
    let term = instance.term();
    let name = instance.course_title().unwrap_or(instance.course_id());
    PendingDelete::Instance {
        term,
        course_id: instance.course_id().to_owned(),
        title: format!("{name} ({term})"),
    }
}

/// Opens the confirmation dialog, or explains why the delete is refused
fn request_delete(
    state: &mut AppState,
    target: Option<(bool, PendingDelete)>,
    refusal: &str,
) -> Vec<Cmd> {
    match target {
        Some((true, pending)) => {
            state.dialog = Some(ConfirmDialog::new(pending));
            vec![Cmd::RequestRender]
        }
        Some((false, _)) => {
            state.system.status_message = Some(refusal.to_owned());
            vec![Cmd::RequestRender]
        }
        None => vec![],
    }
}

fn update_dialog(msg: DialogMsg, state: &mut AppState) -> Vec<Cmd> {
    let Some(dialog) = state.dialog.take() else {
        return vec![];
    };
    match msg {
        DialogMsg::Cancel => vec![Cmd::RequestRender],
        DialogMsg::Confirm => {
            state.system.status_message = Some(format!("Deleting \"{}\"...", dialog.target.title()));
            let (target, endpoint) = match dialog.target {
                PendingDelete::Course { course_id, .. } => (
                    RequestTarget::DeleteCourse {
                        course_id: course_id.clone(),
                    },
                    Endpoint::DeleteCourse { course_id },
                ),
                PendingDelete::Instance {
                    term, course_id, ..
                } => (
                    RequestTarget::DeleteInstance {
                        term,
                        course_id: course_id.clone(),
                    },
                    Endpoint::DeleteInstance { term, course_id },
                ),
            };
            let id = state.requests.begin_mutation(target);
            vec![Cmd::api(id, endpoint), Cmd::RequestRender]
        }
    }
}

fn update_course_form(
    msg: CourseFormMsg,
    state: &mut AppState,
    ctx: &UpdateContext<'_>,
) -> Vec<Cmd> {
    match msg {
        CourseFormMsg::Submit => {
            if state.course_form.submitting {
                return vec![];
            }
            match state.course_form.validate() {
                Ok(course) => {
                    state.course_form.submitting = true;
                    let id = state.requests.begin_mutation(RequestTarget::CreateCourse);
                    vec![
                        Cmd::api(id, Endpoint::CreateCourse(course)),
                        Cmd::RequestRender,
                    ]
                }
                Err(_) => vec![Cmd::RequestRender],
            }
        }
        other => state.course_form.update(other, ctx),
    }
}

fn update_instance_form(
    msg: InstanceFormMsg,
    state: &mut AppState,
    ctx: &UpdateContext<'_>,
) -> Vec<Cmd> {
    match msg {
        InstanceFormMsg::Submit => {
            if state.instance_form.submitting {
                return vec![];
            }
            match state.instance_form.validate() {
                Ok(instance) => {
                    state.instance_form.submitting = true;
                    let id = state.requests.begin_mutation(RequestTarget::CreateInstance);
                    vec![
                        Cmd::api(id, Endpoint::CreateInstance(instance)),
                        Cmd::RequestRender,
                    ]
                }
                Err(_) => vec![Cmd::RequestRender],
            }
        }
        other => state.instance_form.update(other, ctx),
    }
}

/// Stores a page load result. A payload of the wrong shape counts as a failure.
fn store<T>(slot: &mut Remote<T>, outcome: Result<Option<T>, ApiFailure>) -> Vec<Cmd> {
    match outcome {
        Ok(Some(value)) => {
            *slot = Remote::Loaded(value);
            vec![]
        }
        Ok(None) => {
            *slot = Remote::Failed("Unexpected response from server".to_owned());
            vec![Cmd::LogError {
                message: "Unexpected payload for page load".to_owned(),
            }]
        }
        Err(ApiFailure::NotFound) => {
            *slot = Remote::NotFound;
            vec![]
        }
        Err(ApiFailure::Message(message)) => {
            let log = Cmd::LogError {
                message: format!("Load failed: {message}"),
            };
            *slot = Remote::Failed(message);
            vec![log]
        }
    }
}

fn handle_reply(reply: ApiReply, state: &mut AppState) -> Vec<Cmd> {
    let Some(target) = state.requests.take(reply.request) else {
        log::debug!("Dropping stale reply {}", reply.request);
        return vec![];
    };
    let outcome = reply.outcome;

    let mut cmds = match target {
        RequestTarget::Dashboard => store(
            &mut state.dashboard.catalog,
            outcome.map(|p| match p {
                ApiPayload::Catalog(catalog) => Some(catalog),
                _ => None,
            }),
        ),
        RequestTarget::CourseList => {
            let cmds = store(
                &mut state.courses.catalog,
                outcome.map(|p| match p {
                    ApiPayload::Catalog(catalog) => Some(catalog),
                    _ => None,
                }),
            );
            state.courses.selected = 0;
            cmds
        }
        RequestTarget::CourseDetail => store(
            &mut state.course_detail.detail,
            outcome.map(|p| match p {
                ApiPayload::CourseDetail(detail) => Some(detail),
                _ => None,
            }),
        ),
        RequestTarget::InstanceList => match outcome {
            Ok(ApiPayload::Instances(instances)) => {
                state.instances.set_loaded(instances);
                vec![]
            }
            other => store(&mut state.instances.instances, other.map(|_| None)),
        },
        RequestTarget::InstanceDetail => store(
            &mut state.instance_detail.instance,
            outcome.map(|p| match p {
                ApiPayload::Instance(instance) => Some(instance),
                _ => None,
            }),
        ),
        RequestTarget::CourseFormOptions => store(
            &mut state.course_form.options,
            outcome.map(|p| match p {
                ApiPayload::Courses(courses) => Some(courses),
                _ => None,
            }),
        ),
        RequestTarget::InstanceFormOptions => store(
            &mut state.instance_form.options,
            outcome.map(|p| match p {
                ApiPayload::Courses(courses) => Some(courses),
                _ => None,
            }),
        ),
        RequestTarget::DeleteCourse { course_id } => course_deleted(state, &course_id, outcome),
        RequestTarget::DeleteInstance { term, course_id } => {
            instance_deleted(state, term, &course_id, outcome)
        }
        RequestTarget::CreateCourse => course_created(state, outcome),
        RequestTarget::CreateInstance => instance_created(state, outcome),
    };
    cmds.push(Cmd::RequestRender);
    cmds
}

fn course_deleted(
    state: &mut AppState,
    course_id: &str,
    outcome: Result<ApiPayload, ApiFailure>,
) -> Vec<Cmd> {
    if let Err(failure) = outcome {
        let message = format!("Failed to delete course: {}", failure.message());
        state.system.status_message = Some(message.clone());
        return vec![Cmd::LogError { message }];
    }

    state.courses.remove_course(course_id);
    if let Some(catalog) = state.dashboard.catalog.loaded_mut() {
        catalog.remove_course(course_id);
    }
    state.system.status_message = Some(format!("Course {course_id} deleted"));

    let mut cmds = vec![Cmd::LogInfo {
        message: format!("Deleted course {course_id}"),
    }];
    if state.nav.route == Route::CourseDetail(course_id.to_owned()) {
        cmds.extend(redirect(state, Route::Courses));
    }
    cmds
}

fn instance_deleted(
    state: &mut AppState,
    term: Term,
    course_id: &str,
    outcome: Result<ApiPayload, ApiFailure>,
) -> Vec<Cmd> {
    if let Err(failure) = outcome {
        let message = format!("Failed to delete instance: {}", failure.message());
        state.system.status_message = Some(message.clone());
        return vec![Cmd::LogError { message }];
    }

    state.instances.remove_instance(term, course_id);
    if let Some(detail) = state.course_detail.detail.loaded_mut() {
        detail.instances.retain(|i| !i.is_offering(term, course_id));
    }
    if let Some(catalog) = state.dashboard.catalog.loaded_mut() {
        catalog.remove_instance(term, course_id);
    }
    state.system.status_message = Some(format!("Instance {course_id} ({term}) deleted"));

    let mut cmds = vec![Cmd::LogInfo {
        message: format!("Deleted instance {course_id} {}/{}", term.year, term.semester),
    }];
    let on_detail = matches!(
        &state.nav.route,
        Route::InstanceDetail { term: t, course_id: c } if *t == term && c == course_id
    );
    if on_detail {
        cmds.extend(redirect(state, Route::Instances));
    }
    cmds
}

fn course_created(state: &mut AppState, outcome: Result<ApiPayload, ApiFailure>) -> Vec<Cmd> {
    match outcome {
        Ok(payload) => {
            let title = match payload {
                ApiPayload::CourseCreated(course) => course.title,
                _ => state.course_form.title.value().trim().to_owned(),
            };
            state.course_form.reset();
            state.system.status_message = Some(format!("Course \"{title}\" created"));
            if state.nav.route == Route::CreateCourse {
                redirect(state, Route::Courses)
            } else {
                vec![]
            }
        }
        Err(failure) => {
            state.course_form.submitting = false;
            state.course_form.error = Some(failure.message());
            if state.nav.route != Route::CreateCourse {
                state.system.status_message =
                    Some(format!("Failed to create course: {}", failure.message()));
            }
            vec![Cmd::LogError {
                message: format!("Create course failed: {}", failure.message()),
            }]
        }
    }
}

fn instance_created(state: &mut AppState, outcome: Result<ApiPayload, ApiFailure>) -> Vec<Cmd> {
    match outcome {
        Ok(_) => {
            state.instance_form = InstanceFormState::new(None, state.today());
            state.system.status_message = Some("Course instance created".to_owned());
            if matches!(state.nav.route, Route::CreateInstance { .. }) {
                redirect(state, Route::Instances)
            } else {
                vec![]
            }
        }
        Err(failure) => {
            state.instance_form.submitting = false;
            state.instance_form.error = Some(failure.message());
            if !matches!(state.nav.route, Route::CreateInstance { .. }) {
                state.system.status_message =
                    Some(format!("Failed to create instance: {}", failure.message()));
            }
            vec![Cmd::LogError {
                message: format!("Create instance failed: {}", failure.message()),
            }]
        }
    }
}

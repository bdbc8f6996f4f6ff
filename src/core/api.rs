//! Request and reply types exchanged between `update` and the API service

use crate::domain::{
    catalog::Catalog,
    course::{Course, NewCourse},
    course_detail::CourseDetail,
    instance::{CourseInstance, NewInstance},
    term::Term,
};

pub type RequestId = u64;

/// What the backend should be asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Courses and instances together
    Catalog,
    Courses,
    /// The course with its prerequisites, dependents and instances
    CourseDetail { course_id: String },
    /// All instances, or only those of one term
    Instances { term: Option<Term> },
    Instance { term: Term, course_id: String },
    DeleteCourse { course_id: String },
    DeleteInstance { term: Term, course_id: String },
    CreateCourse(NewCourse),
    CreateInstance(NewInstance),
}

impl Endpoint {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Endpoint::DeleteCourse { .. }
                | Endpoint::DeleteInstance { .. }
                | Endpoint::CreateCourse(_)
                | Endpoint::CreateInstance(_)
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Catalog => "Catalog",
            Endpoint::Courses => "Courses",
            Endpoint::CourseDetail { .. } => "CourseDetail",
            Endpoint::Instances { .. } => "Instances",
            Endpoint::Instance { .. } => "Instance",
            Endpoint::DeleteCourse { .. } => "DeleteCourse",
            Endpoint::DeleteInstance { .. } => "DeleteInstance",
            Endpoint::CreateCourse(_) => "CreateCourse",
            Endpoint::CreateInstance(_) => "CreateInstance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCall {
    pub request: RequestId,
    pub endpoint: Endpoint,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiPayload {
    Catalog(Catalog),
    Courses(Vec<Course>),
    CourseDetail(CourseDetail),
    Instances(Vec<CourseInstance>),
    Instance(CourseInstance),
    Deleted,
    CourseCreated(Course),
    InstanceCreated(CourseInstance),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    NotFound,
    Message(String),
}

impl ApiFailure {
    pub fn message(&self) -> String {
        match self {
            ApiFailure::NotFound => "Not found".to_owned(),
            ApiFailure::Message(m) => m.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub request: RequestId,
    pub outcome: Result<ApiPayload, ApiFailure>,
}

impl ApiReply {
    pub fn ok(request: RequestId, payload: ApiPayload) -> Self {
        Self {
            request,
            outcome: Ok(payload),
        }
    }

    pub fn err(request: RequestId, failure: ApiFailure) -> Self {
        Self {
            request,
            outcome: Err(failure),
        }
    }
}

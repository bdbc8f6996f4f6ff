//! HTTP client for the catalog backend (`/api/courses`, `/api/instances`).

use std::future::Future;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use super::{
    error::ApiError,
    types::{Envelope, ErrorBody},
};
use crate::{
    core::api::{ApiPayload, Endpoint},
    domain::{
        catalog::Catalog,
        course::{Course, NewCourse},
        course_detail::CourseDetail,
        instance::{CourseInstance, NewInstance},
        term::Term,
    },
    infrastructure::config::ApiConfig,
};

/// Unreserved characters stay as they are, everything else is escaped
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Clone, Debug)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(ApiError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/api/{segments...}` with every segment percent-encoded
    pub fn url(&self, segments: &[&str]) -> String {
        let mut url = format!("{}/api", self.base_url);
        for segment in segments {
            url.push('/');
            url.extend(utf8_percent_encode(segment, PATH_SEGMENT));
        }
        url
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                ApiError::Connection(self.base_url.clone())
            } else {
                ApiError::Http(e)
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            let message = body.into_message().unwrap_or_else(|| {
                format!(
                    "Request failed: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or_default()
                )
            });
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.url(segments);
        log::debug!("GET {url}");
        let response = self.send(self.client.get(&url)).await?;
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(envelope.data)
    }

    /// Posts `body`; `None` when the reply carries no decodable `data`
    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<Option<T>, ApiError> {
        let url = self.url(segments);
        log::debug!("POST {url}");
        let response = self.send(self.client.post(&url).json(body)).await?;
        let text = response.text().await.map_err(ApiError::Http)?;
        Ok(serde_json::from_str::<Envelope<T>>(&text)
            .ok()
            .map(|envelope| envelope.data))
    }

    async fn delete(&self, segments: &[&str]) -> Result<(), ApiError> {
        let url = self.url(segments);
        log::debug!("DELETE {url}");
        self.send(self.client.delete(&url)).await?;
        Ok(())
    }

    pub async fn courses(&self) -> Result<Vec<Course>, ApiError> {
        self.get(&["courses"]).await
    }

    pub async fn course(&self, course_id: &str) -> Result<Course, ApiError> {
        self.get(&["courses", course_id]).await
    }

    pub async fn prerequisites(&self, course_id: &str) -> Result<Vec<Course>, ApiError> {
        self.get(&["courses", course_id, "prereqs"]).await
    }

    pub async fn dependents(&self, course_id: &str) -> Result<Vec<Course>, ApiError> {
        self.get(&["courses", course_id, "dependent"]).await
    }

    pub async fn instances(&self) -> Result<Vec<CourseInstance>, ApiError> {
        self.get(&["instances"]).await
    }

    pub async fn instances_in(&self, term: Term) -> Result<Vec<CourseInstance>, ApiError> {
        let year = term.year.to_string();
        let semester = term.semester.to_string();
        self.get(&["instances", &year, &semester]).await
    }

    pub async fn instance(&self, term: Term, course_id: &str) -> Result<CourseInstance, ApiError> {
        let year = term.year.to_string();
        let semester = term.semester.to_string();
        self.get(&["instances", &year, &semester, course_id]).await
    }

    pub async fn catalog(&self) -> Result<Catalog, ApiError> {
        let (courses, instances) = tokio::try_join!(self.courses(), self.instances())?;
        Ok(Catalog::new(courses, instances))
    }

    /// The course plus its relations. Only a missing course is a 404; a
    /// course without prerequisites or dependents may answer 404 for those.
    pub async fn course_detail(&self, course_id: &str) -> Result<CourseDetail, ApiError> {
        let (course, prerequisites, dependents, instances) = tokio::try_join!(
            self.course(course_id),
            or_empty(self.prerequisites(course_id)),
            or_empty(self.dependents(course_id)),
            self.instances(),
        )?;
        Ok(CourseDetail::new(course, prerequisites, dependents, instances))
    }

    pub async fn delete_course(&self, course_id: &str) -> Result<(), ApiError> {
        self.delete(&["courses", course_id]).await
    }

    pub async fn delete_instance(&self, term: Term, course_id: &str) -> Result<(), ApiError> {
        let year = term.year.to_string();
        let semester = term.semester.to_string();
        self.delete(&["instances", &year, &semester, course_id])
            .await
    }

    /// The created course, or the submitted one when the backend echoes nothing
    pub async fn create_course(&self, course: &NewCourse) -> Result<Course, ApiError> {
        let created = self.post::<_, Course>(&["courses"], course).await?;
        Ok(created.unwrap_or_else(|| course.clone().into()))
    }

    pub async fn create_instance(
        &self,
        instance: &NewInstance,
    ) -> Result<CourseInstance, ApiError> {
        let created = self
            .post::<_, CourseInstance>(&["instances"], instance)
            .await?;
        Ok(created.unwrap_or_else(|| instance.clone().into()))
    }

    /// Runs one endpoint and wraps the result for the update loop
    pub async fn call(&self, endpoint: &Endpoint) -> Result<ApiPayload, ApiError> {
        let payload = match endpoint {
            Endpoint::Catalog => ApiPayload::Catalog(self.catalog().await?),
            Endpoint::Courses => ApiPayload::Courses(self.courses().await?),
            Endpoint::CourseDetail { course_id } => {
                ApiPayload::CourseDetail(self.course_detail(course_id).await?)
            }
            Endpoint::Instances { term: None } => ApiPayload::Instances(self.instances().await?),
            Endpoint::Instances { term: Some(term) } => {
                ApiPayload::Instances(self.instances_in(*term).await?)
            }
            Endpoint::Instance { term, course_id } => {
                ApiPayload::Instance(self.instance(*term, course_id).await?)
            }
            Endpoint::DeleteCourse { course_id } => {
                self.delete_course(course_id).await?;
                ApiPayload::Deleted
            }
            Endpoint::DeleteInstance { term, course_id } => {
                self.delete_instance(*term, course_id).await?;
                ApiPayload::Deleted
            }
            Endpoint::CreateCourse(course) => {
                ApiPayload::CourseCreated(self.create_course(course).await?)
            }
            Endpoint::CreateInstance(instance) => {
                ApiPayload::InstanceCreated(self.create_instance(instance).await?)
            }
        };
        Ok(payload)
    }
}

async fn or_empty<T>(
    request: impl Future<Output = Result<Vec<T>, ApiError>>,
) -> Result<Vec<T>, ApiError> {
    match request.await {
        Err(ApiError::NotFound) => Ok(vec![]),
        other => other,
    }
}

//! Fake catalog backend shared by the integration tests

#![allow(dead_code)]

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use courseboard::infrastructure::config::{ApiConfig, Config};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
}

fn courses() -> Value {
    json!([
        {
            "courseId": "CS101",
            "title": "Programming Basics",
            "description": "Variables, loops and functions",
            "prerequisites": []
        },
        {
            "courseId": "CS201",
            "title": "Data Structures",
            "description": "Lists, trees and graphs",
            "prerequisites": [{ "id": "CS101" }]
        },
        {
            "courseId": "MA110",
            "title": "Discrete Math",
            "description": "Sets and proofs",
            "prerequisites": null
        }
    ])
}

fn instances() -> Value {
    json!([
        {
            "id": 1,
            "course": { "courseId": "CS101", "title": "Programming Basics" },
            "year": 2024,
            "semester": 1,
            "instructor": "Dr. Rao",
            "studentCapacity": 30,
            "enrolled": 28,
            "students": [
                { "id": 1, "name": "Ada Park", "email": "ada@uni.test", "enrollmentDate": "2024-01-10" }
            ]
        },
        {
            "id": 2,
            "course": { "courseId": "CS201", "title": "Data Structures" },
            "year": 2024,
            "semester": 2,
            "instructor": "Dr. Chen",
            "studentCapacity": 40,
            "enrolled": 0
        }
    ])
}

fn data(value: Value) -> Response {
    Json(json!({ "data": value })).into_response()
}

fn error(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

fn find_course(course_id: &str) -> Option<Value> {
    courses()
        .as_array()?
        .iter()
        .find(|c| c["courseId"] == course_id)
        .cloned()
}

fn instances_where(pred: impl Fn(&Value) -> bool) -> Vec<Value> {
    instances()
        .as_array()
        .map(|all| all.iter().filter(|i| pred(i)).cloned().collect())
        .unwrap_or_default()
}

async fn list_courses() -> Response {
    data(courses())
}

async fn get_course(Path(course_id): Path<String>) -> Response {
    match find_course(&course_id) {
        Some(course) => data(course),
        None => error(StatusCode::NOT_FOUND, json!({ "message": "Course not found" })),
    }
}

async fn delete_course(Path(course_id): Path<String>) -> Response {
    match course_id.as_str() {
        "CS101" => error(
            StatusCode::CONFLICT,
            json!({ "message": "Course has dependent courses" }),
        ),
        "BROKEN" => error(StatusCode::INTERNAL_SERVER_ERROR, json!({})),
        _ if find_course(&course_id).is_some() => data(json!(null)),
        _ => error(StatusCode::NOT_FOUND, json!({})),
    }
}

async fn prereqs(Path(course_id): Path<String>) -> Response {
    match course_id.as_str() {
        "CS201" => data(json!([find_course("CS101")])),
        // A course without prerequisites answers 404, like the real backend
        _ => error(StatusCode::NOT_FOUND, json!({})),
    }
}

async fn dependents(Path(course_id): Path<String>) -> Response {
    match course_id.as_str() {
        "CS101" => data(json!([find_course("CS201")])),
        _ => data(json!([])),
    }
}

async fn create_course(Json(body): Json<Value>) -> Response {
    if body["courseId"] == "CS101" {
        return error(
            StatusCode::BAD_REQUEST,
            json!({ "error": "Course CS101 already exists" }),
        );
    }
    data(body)
}

async fn list_instances() -> Response {
    data(Value::Array(instances_where(|_| true)))
}

async fn instances_in_term(Path((year, semester)): Path<(i32, u8)>) -> Response {
    data(Value::Array(instances_where(|i| {
        i["year"] == year && i["semester"] == semester
    })))
}

async fn get_instance(Path((year, semester, course_id)): Path<(i32, u8, String)>) -> Response {
    let found = instances_where(|i| {
        i["year"] == year && i["semester"] == semester && i["course"]["courseId"] == course_id
    });
    match found.into_iter().next() {
        Some(instance) => data(instance),
        None => error(StatusCode::NOT_FOUND, json!({ "message": "Instance not found" })),
    }
}

async fn delete_instance(Path((_, _, _)): Path<(i32, u8, String)>) -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Created, with nothing echoed back
async fn create_instance(Json(_): Json<Value>) -> Response {
    StatusCode::CREATED.into_response()
}

pub fn router() -> Router {
    Router::new()
        .route("/api/courses", get(list_courses).post(create_course))
        .route("/api/courses/:id", get(get_course).delete(delete_course))
        .route("/api/courses/:id/prereqs", get(prereqs))
        .route("/api/courses/:id/dependent", get(dependents))
        .route("/api/instances", get(list_instances).post(create_instance))
        .route("/api/instances/:year/:semester", get(instances_in_term))
        .route(
            "/api/instances/:year/:semester/:course_id",
            get(get_instance).delete(delete_instance),
        )
}

/// Serves the fake backend on an ephemeral port and returns its base URL
pub async fn spawn_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router()).await.expect("fake backend");
    });
    format!("http://{addr}")
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_owned(),
        ..ApiConfig::default()
    }
}

pub fn config(base_url: &str) -> Config {
    Config::defaults()
        .expect("embedded config")
        .with_base_url(base_url)
}

#![allow(dead_code)]

//! Test infrastructure for pf-server API tests

use pf_core::ProjectRules;
use pf_server::{AppState, build_router};
use pf_store::{MessageLog, ProjectStore};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Create an empty AppState with default rules and throttle policy
pub fn create_test_app_state() -> AppState {
    AppState::new(
        ProjectStore::new(),
        MessageLog::default(),
        ProjectRules::default(),
    )
}

/// Create an AppState whose project validation is switched off
pub fn create_unvalidated_app_state() -> AppState {
    AppState::new(
        ProjectStore::new(),
        MessageLog::default(),
        ProjectRules {
            enabled: false,
            ..ProjectRules::default()
        },
    )
}

/// Send a request through a fresh router and decode the JSON body
pub async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
    let app = build_router(state.clone());

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };

    (status, json)
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// POST a contact submission as if forwarded for the given client
pub fn contact_request(origin: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("Content-Type", "application/json")
        .header("X-Forwarded-For", origin)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn valid_project_body(title: &str) -> Value {
    json!({
        "title": title,
        "description": "A test project",
        "technologies": ["Rust", "Axum"],
    })
}

pub fn valid_contact_body() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "message": "Hello there",
    })
}

/// Create a project through the API and return its id
pub async fn create_test_project(state: &AppState, title: &str) -> u64 {
    let (status, json) = send(
        state,
        json_request("POST", "/api/projects", valid_project_body(title)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    json["id"].as_u64().unwrap()
}

use crate::ApiError;

use pf_core::{CoreError, FieldError};
use pf_store::StoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Item not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Item not found");
    assert!(json["error"].get("errors").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_every_field() {
    let error = ApiError::Validation {
        message: "Validation failed".into(),
        errors: vec![
            FieldError::new("title", "Title is required"),
            FieldError::new("technologies", "At least one technology is required"),
        ],
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["errors"][0]["field"], "title");
    assert_eq!(json["error"]["errors"][1]["field"], "technologies");
}

#[tokio::test]
async fn test_rate_limited_returns_429() {
    let error = ApiError::RateLimited {
        message: "Too many submissions".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "RATE_LIMITED");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let error = ApiError::BadRequest {
        message: "Malformed JSON".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[test]
fn test_core_validation_error_converts_to_validation() {
    let core_error = CoreError::validation(vec![FieldError::new("email", "Invalid")]);

    let api_error: ApiError = core_error.into();

    match api_error {
        ApiError::Validation { errors, .. } => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "email");
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_store_not_found_converts_to_not_found() {
    let store_error = StoreError::ProjectNotFound {
        id: 4,
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = store_error.into();

    assert!(matches!(api_error, ApiError::NotFound { .. }));
}

//! JSON body extractor with API-shaped rejections

use crate::ApiError;

use std::future::Future;
use std::panic::Location;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;
use serde_json::error::Category;

/// Like `axum::Json`, but a malformed body is reported through `ApiError`
/// instead of axum's plain-text rejection.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            Ok(ValidJson(value))
        }
    }
}

/// Decode an optional JSON body. An empty or whitespace-only body is
/// treated as `{}`; wrong field types map to a validation error.
#[track_caller]
pub fn parse_json_or_default<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let caller = Location::caller();
    serde_json::from_slice(body).map_err(|e| match e.classify() {
        Category::Data => ApiError::Validation {
            message: format!("Failed to deserialize the JSON body: {e}"),
            errors: Vec::new(),
            location: ErrorLocation::from(caller),
        },
        _ => ApiError::BadRequest {
            message: format!("Failed to parse the request body as JSON: {e}"),
            location: ErrorLocation::from(caller),
        },
    })
}

//! Contact form handler
//!
//! Submissions are recorded before the throttle is checked, so an origin
//! that goes over the ceiling still has its message kept; it just gets a 429.

use crate::{ApiError, ApiResult, AppState, ClientAddr, ContactRequest, ContactResponse, ValidJson};

use pf_core::{ContactMessage, validate_contact};

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use error_location::ErrorLocation;

/// POST /api/contact
///
/// Validate and record a contact submission
pub async fn submit_contact(
    State(state): State<AppState>,
    ClientAddr(origin): ClientAddr,
    ValidJson(req): ValidJson<ContactRequest>,
) -> ApiResult<(StatusCode, Json<ContactResponse>)> {
    // 1. Validate every field
    let input = req.into_new_message();
    validate_contact(&input)?;

    // 2. Record, then evaluate the origin's recent volume
    let message = ContactMessage::new(input, origin, Utc::now());
    let submission = state.messages.record(message).await;

    if submission.throttled {
        return Err(ApiError::RateLimited {
            message: "Too many submissions, please try again later".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let reference = submission.message.reference_id();
    log::info!(
        "Received contact message {} from {} ({} recent)",
        reference,
        submission.message.origin,
        submission.recent_count
    );

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            message: "Message received successfully".to_string(),
            id: reference,
        }),
    ))
}

use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Liveness, in-memory collection sizes and the active throttle
pub async fn health_check(State(state): State<AppState>) -> Response {
    let policy = state.messages.policy();
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "projects": state.projects.count().await,
            "messages": state.messages.count().await,
        },
        "contactThrottle": {
            "maxSubmissions": policy.max_submissions,
            "windowSecs": policy.window.num_seconds(),
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

use crate::{
    AppState, create_project, delete_project, get_project, health, landing, list_projects,
    submit_contact, update_project,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Landing page
        .route("/", get(landing::index))
        // Health check
        .route("/health", get(health::health_check))
        // Projects
        .route("/api/projects", get(list_projects).post(create_project))
        .route(
            "/api/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        // Contact form
        .route("/api/contact", post(submit_contact))
        // Add shared state
        .with_state(state)
        // CORS middleware (any origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

//! Project REST API handlers
//!
//! CRUD over the in-memory project store.

use crate::{
    ApiError, ApiResult, AppState, CreateProjectRequest, DeleteResponse, ProjectDto,
    UpdateProjectRequest, ValidJson, parse_json_or_default,
};

use pf_core::{validate_new_project, validate_project_patch};

use std::panic::Location;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/projects
///
/// List all projects, newest first
pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<ProjectDto>> {
    let projects = state.projects.find_all().await;

    Json(projects.into_iter().map(ProjectDto::from).collect())
}

/// GET /api/projects/:id
///
/// Get a single project by ID
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectDto>> {
    let project_id = parse_project_id(&id)?;

    let project = state
        .projects
        .find_by_id(project_id)
        .await
        .ok_or_else(|| not_found(&id))?;

    Ok(Json(project.into()))
}

/// POST /api/projects
///
/// Create a new project
pub async fn create_project(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectDto>)> {
    let input = req.into_new_project();
    validate_new_project(&input, &state.rules)?;

    let project = state.projects.create(input).await;

    log::info!(
        "Created project {} ({}) via REST API",
        project.id,
        project.title
    );

    Ok((StatusCode::CREATED, Json(project.into())))
}

/// PUT /api/projects/:id
///
/// Merge the given fields into a project. Blank values keep the old value.
/// A missing body counts as `{}`, so the project only gets a new `updatedAt`.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<ProjectDto>> {
    // 1. Resolve the project before looking at the body
    let project_id = parse_project_id(&id)?;
    if state.projects.find_by_id(project_id).await.is_none() {
        return Err(not_found(&id));
    }

    // 2. Decode, then validate what would actually change
    let req: UpdateProjectRequest = parse_json_or_default(&body)?;
    let patch = req.into_patch();
    if patch.is_empty() {
        log::debug!(
            "Empty update for project {}, touching timestamp only",
            project_id
        );
    }
    validate_project_patch(&patch, &state.rules)?;

    // 3. Merge
    let project = state.projects.update(project_id, patch).await?;

    log::info!(
        "Updated project {} ({}) via REST API",
        project.id,
        project.title
    );

    Ok(Json(project.into()))
}

/// DELETE /api/projects/:id
///
/// Remove a project. Remaining ids are not renumbered.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let project_id = parse_project_id(&id)?;

    let project = state.projects.delete(project_id).await?;

    log::info!(
        "Deleted project {} ({}) via REST API",
        project.id,
        project.title
    );

    Ok(Json(DeleteResponse {
        message: "Project deleted".to_string(),
        deleted_id: project.id,
    }))
}

// =============================================================================
// Helpers
// =============================================================================

/// Strict id parsing. Anything that is not a plain unsigned integer cannot
/// match a stored project, so it is reported as not found.
fn parse_project_id(raw: &str) -> ApiResult<u64> {
    raw.parse::<u64>().map_err(|_| not_found(raw))
}

#[track_caller]
fn not_found(id: &str) -> ApiError {
    ApiError::NotFound {
        message: format!("Project {} not found", id),
        location: ErrorLocation::from(Location::caller()),
    }
}

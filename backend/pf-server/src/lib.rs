pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod landing;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    contact::{
        contact::submit_contact, contact_request::ContactRequest,
        contact_response::ContactResponse,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        client_addr::ClientAddr,
        valid_json::{ValidJson, parse_json_or_default},
    },
    projects::{
        create_project_request::CreateProjectRequest,
        project_dto::ProjectDto,
        projects::{create_project, delete_project, get_project, list_projects, update_project},
        update_project_request::UpdateProjectRequest,
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;

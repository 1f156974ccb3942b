pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::contact_message::{ContactMessage, NewContactMessage};
pub use models::field_error::FieldError;
pub use models::project::{DEFAULT_IMAGE_URL, DEFAULT_LIVE_URL, NewProject, Project, ProjectPatch};
pub use validation::{
    ProjectRules, is_valid_email, validate_contact, validate_new_project, validate_project_patch,
};

#[cfg(test)]
mod tests;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Project {id} not found {location}")]
    ProjectNotFound { id: u64, location: ErrorLocation },
}

pub type Result<T> = std::result::Result<T, StoreError>;

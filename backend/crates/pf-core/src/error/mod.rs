use crate::FieldError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {} field(s) failed {location}", .errors.len())]
    Validation {
        errors: Vec<FieldError>,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Build a validation error from the collected field failures
    #[track_caller]
    pub fn validation(errors: Vec<FieldError>) -> Self {
        CoreError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field failures carried by this error
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            CoreError::Validation { errors, .. } => errors,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;

//! Input validation for projects and contact submissions.
//!
//! Every check runs and all failures are collected, so callers can report
//! each offending field at once instead of only the first.

use crate::{CoreError, FieldError, NewContactMessage, NewProject, ProjectPatch, Result};

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Rules applied to project input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRules {
    /// When false, project input is accepted as-is
    pub enabled: bool,
    pub max_title_length: usize,
    pub max_description_length: usize,
}

impl Default for ProjectRules {
    fn default() -> Self {
        Self {
            enabled: true,
            max_title_length: 200,
            max_description_length: 10_000,
        }
    }
}

/// Check whether a string has the `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate input for a new project
pub fn validate_new_project(input: &NewProject, rules: &ProjectRules) -> Result<()> {
    if !rules.enabled {
        return Ok(());
    }

    let mut errors = Vec::new();

    if input.title.is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    } else {
        check_length(&mut errors, "title", &input.title, rules.max_title_length);
    }

    if input.description.is_empty() {
        errors.push(FieldError::new("description", "Description is required"));
    } else {
        check_length(
            &mut errors,
            "description",
            &input.description,
            rules.max_description_length,
        );
    }

    if input.technologies.is_empty() {
        errors.push(FieldError::new(
            "technologies",
            "At least one technology is required",
        ));
    }

    finish(errors)
}

/// Validate the fields of a patch that would actually be applied
pub fn validate_project_patch(patch: &ProjectPatch, rules: &ProjectRules) -> Result<()> {
    if !rules.enabled {
        return Ok(());
    }

    let mut errors = Vec::new();

    if let Some(title) = &patch.title {
        check_length(&mut errors, "title", title, rules.max_title_length);
    }
    if let Some(description) = &patch.description {
        check_length(
            &mut errors,
            "description",
            description,
            rules.max_description_length,
        );
    }

    finish(errors)
}

/// Validate a contact submission. Always enforced.
pub fn validate_contact(input: &NewContactMessage) -> Result<()> {
    let mut errors = Vec::new();

    if input.name.is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }

    if input.email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !is_valid_email(&input.email) {
        errors.push(FieldError::new("email", "Please provide a valid email"));
    }

    if input.message.is_empty() {
        errors.push(FieldError::new("message", "Message is required"));
    }

    finish(errors)
}

fn check_length(errors: &mut Vec<FieldError>, field: &str, value: &str, max: usize) {
    let len = value.chars().count();
    if len > max {
        errors.push(FieldError::new(
            field,
            format!("{field} must be at most {max} characters, got {len}"),
        ));
    }
}

#[track_caller]
fn finish(errors: Vec<FieldError>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::validation(errors))
    }
}

//! Contact form submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded contact submission. Append-only once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Client address the submission came from, used for throttling
    pub origin: String,
    pub submitted_at: DateTime<Utc>,
}

/// Submitted form fields, before provenance is attached
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(input: NewContactMessage, origin: String, submitted_at: DateTime<Utc>) -> Self {
        Self {
            name: input.name,
            email: input.email,
            message: input.message,
            origin,
            submitted_at,
        }
    }

    /// Reference handed back to the submitter: `<epoch millis>-<name slug>`.
    /// Not a stored key.
    pub fn reference_id(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        for c in self.name.chars().flat_map(char::to_lowercase) {
            if c.is_alphanumeric() {
                slug.push(c);
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        let slug = slug.trim_end_matches('-');

        if slug.is_empty() {
            format!("{}-contact", self.submitted_at.timestamp_millis())
        } else {
            format!("{}-{}", self.submitted_at.timestamp_millis(), slug)
        }
    }
}

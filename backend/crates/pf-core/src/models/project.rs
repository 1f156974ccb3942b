//! Project entity - a portfolio entry with descriptive metadata and links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Image shown when a project is created without one
pub const DEFAULT_IMAGE_URL: &str = "https://via.placeholder.com/400x225";

/// Link used when a project is created without a live deployment
pub const DEFAULT_LIVE_URL: &str = "#";

/// A stored portfolio project.
/// Identifiers are assigned by the store and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Ordered technology tags, e.g. ["React", "Node.js"]
    pub technologies: Vec<String>,
    pub image_url: String,
    pub live_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating a project, before an identifier is assigned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub live_url: Option<String>,
}

/// Partial update. Empty strings and empty lists count as omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub live_url: Option<String>,
}

impl Project {
    /// Build a project from validated input, filling in default links
    pub fn new(id: u64, input: NewProject, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            technologies: input.technologies,
            image_url: non_empty(input.image_url)
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
            live_url: non_empty(input.live_url).unwrap_or_else(|| DEFAULT_LIVE_URL.to_string()),
            created_at,
            updated_at: None,
        }
    }

    /// Merge a patch into this project.
    ///
    /// Only non-empty values overwrite existing ones, so a patch can never
    /// clear a field. `updated_at` is stamped even when nothing changed.
    pub fn apply(&mut self, patch: ProjectPatch, now: DateTime<Utc>) {
        if let Some(title) = non_empty(patch.title) {
            self.title = title;
        }
        if let Some(description) = non_empty(patch.description) {
            self.description = description;
        }
        if let Some(technologies) = patch.technologies.filter(|t| !t.is_empty()) {
            self.technologies = technologies;
        }
        if let Some(image_url) = non_empty(patch.image_url) {
            self.image_url = image_url;
        }
        if let Some(live_url) = non_empty(patch.live_url) {
            self.live_url = live_url;
        }

        self.updated_at = Some(now);
    }
}

impl ProjectPatch {
    /// True when no field would overwrite anything
    pub fn is_empty(&self) -> bool {
        self.title.as_deref().is_none_or(str::is_empty)
            && self.description.as_deref().is_none_or(str::is_empty)
            && self.technologies.as_ref().is_none_or(Vec::is_empty)
            && self.image_url.as_deref().is_none_or(str::is_empty)
            && self.live_url.as_deref().is_none_or(str::is_empty)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

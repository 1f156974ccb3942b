use pf_core::NewProject;

use serde::Deserialize;

/// Request body for creating a project.
/// Everything is optional here so missing fields surface as field errors.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub live_url: Option<String>,
}

impl CreateProjectRequest {
    /// Trim text input; blank technology tags are dropped
    pub fn into_new_project(self) -> NewProject {
        NewProject {
            title: trimmed(self.title).unwrap_or_default(),
            description: trimmed(self.description).unwrap_or_default(),
            technologies: self
                .technologies
                .unwrap_or_default()
                .into_iter()
                .filter_map(|t| trimmed(Some(t)))
                .collect(),
            image_url: trimmed(self.image_url),
            live_url: trimmed(self.live_url),
        }
    }
}

pub(crate) fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

use super::create_project_request::trimmed;

use pf_core::ProjectPatch;

use serde::Deserialize;

/// Request body for updating a project.
/// Absent, null, blank, and empty-list values leave the field unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub live_url: Option<String>,
}

impl UpdateProjectRequest {
    pub fn into_patch(self) -> ProjectPatch {
        ProjectPatch {
            title: trimmed(self.title),
            description: trimmed(self.description),
            technologies: self.technologies.map(|tags| {
                tags.into_iter()
                    .filter_map(|t| trimmed(Some(t)))
                    .collect()
            }),
            image_url: trimmed(self.image_url),
            live_url: trimmed(self.live_url),
        }
    }
}

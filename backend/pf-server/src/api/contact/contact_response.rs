use serde::Serialize;

/// Acknowledgement for an accepted contact submission
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: String,
    /// Reference derived from submission time and sender name
    pub id: String,
}

use serde::Serialize;

/// Confirmation returned after a delete
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub message: String,
    pub deleted_id: u64,
}

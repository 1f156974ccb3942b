use pf_core::NewContactMessage;

use serde::Deserialize;

/// Request body for the contact form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactRequest {
    pub fn into_new_message(self) -> NewContactMessage {
        NewContactMessage {
            name: trim(self.name),
            email: trim(self.email),
            message: trim(self.message),
        }
    }
}

fn trim(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

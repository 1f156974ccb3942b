pub mod contact_message;
pub mod field_error;
pub mod project;

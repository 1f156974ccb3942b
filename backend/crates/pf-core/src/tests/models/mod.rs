mod contact_message;
mod project;

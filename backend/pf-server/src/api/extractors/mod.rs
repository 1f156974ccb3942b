pub mod client_addr;
pub mod valid_json;

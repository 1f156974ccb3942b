use crate::{ContactMessage, NewContactMessage};

use chrono::{TimeZone, Utc};

fn message_from(name: &str) -> ContactMessage {
    let submitted_at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
    ContactMessage::new(
        NewContactMessage {
            name: name.to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        },
        "10.0.0.1".to_string(),
        submitted_at,
    )
}

#[test]
fn test_reference_id_combines_timestamp_and_name() {
    let message = message_from("Ada Lovelace");

    assert_eq!(message.reference_id(), "1700000000123-ada-lovelace");
}

#[test]
fn test_reference_id_collapses_punctuation() {
    let message = message_from("  O'Brien,  Pat!! ");

    assert_eq!(message.reference_id(), "1700000000123-o-brien-pat");
}

#[test]
fn test_reference_id_falls_back_when_name_has_no_letters() {
    let message = message_from("!!!");

    assert_eq!(message.reference_id(), "1700000000123-contact");
}

use crate::{
    ApiError, ContactRequest, CreateProjectRequest, UpdateProjectRequest, parse_json_or_default,
};

#[test]
fn test_create_request_accepts_camel_case_links() {
    let req: CreateProjectRequest = serde_json::from_str(
        r#"{"title":" X ","description":"Y","technologies":["Go"," "],"imageUrl":"https://img","liveUrl":""}"#,
    )
    .unwrap();

    let input = req.into_new_project();

    assert_eq!(input.title, "X");
    assert_eq!(input.technologies, vec!["Go".to_string()]);
    assert_eq!(input.image_url.as_deref(), Some("https://img"));
    assert_eq!(input.live_url, None);
}

#[test]
fn test_create_request_missing_fields_become_empty() {
    let req: CreateProjectRequest = serde_json::from_str("{}").unwrap();

    let input = req.into_new_project();

    assert!(input.title.is_empty());
    assert!(input.description.is_empty());
    assert!(input.technologies.is_empty());
}

#[test]
fn test_update_request_blank_values_are_omitted() {
    let req: UpdateProjectRequest =
        serde_json::from_str(r#"{"title":"","description":null,"technologies":[]}"#).unwrap();

    let patch = req.into_patch();

    assert!(patch.is_empty());
}

#[test]
fn test_update_request_wrong_type_is_rejected() {
    let result = serde_json::from_str::<UpdateProjectRequest>(r#"{"technologies":"Go"}"#);

    assert!(result.is_err());
}

#[test]
fn test_contact_request_trims_fields() {
    let req: ContactRequest =
        serde_json::from_str(r#"{"name":"  Ada ","email":"ada@example.com","message":" hi "}"#)
            .unwrap();

    let input = req.into_new_message();

    assert_eq!(input.name, "Ada");
    assert_eq!(input.message, "hi");
}

#[test]
fn test_blank_update_body_decodes_as_empty_patch() {
    let req: UpdateProjectRequest = parse_json_or_default(b"  \n").unwrap();

    assert!(req.into_patch().is_empty());
}

#[test]
fn test_update_body_type_error_is_validation() {
    let result = parse_json_or_default::<UpdateProjectRequest>(br#"{"title":5}"#);

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[test]
fn test_update_body_syntax_error_is_bad_request() {
    let result = parse_json_or_default::<UpdateProjectRequest>(b"{\"title\": ");

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

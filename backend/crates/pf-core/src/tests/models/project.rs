use crate::{DEFAULT_IMAGE_URL, DEFAULT_LIVE_URL, NewProject, Project, ProjectPatch};

use chrono::{Duration, Utc};
use googletest::prelude::*;

fn sample_input() -> NewProject {
    NewProject {
        title: "X".to_string(),
        description: "Y".to_string(),
        technologies: vec!["Go".to_string()],
        image_url: None,
        live_url: None,
    }
}

#[test]
fn test_project_new_fills_default_links() {
    let now = Utc::now();
    let project = Project::new(7, sample_input(), now);

    assert_eq!(project.id, 7);
    assert_that!(project.title, eq("X"));
    assert_that!(project.image_url, eq(DEFAULT_IMAGE_URL));
    assert_that!(project.live_url, eq(DEFAULT_LIVE_URL));
    assert_that!(project.created_at, eq(now));
    assert_that!(project.updated_at, none());
}

#[test]
fn test_project_new_treats_empty_links_as_missing() {
    let input = NewProject {
        image_url: Some(String::new()),
        live_url: Some("https://example.com".to_string()),
        ..sample_input()
    };
    let project = Project::new(1, input, Utc::now());

    assert_that!(project.image_url, eq(DEFAULT_IMAGE_URL));
    assert_that!(project.live_url, eq("https://example.com"));
}

#[test]
fn test_apply_overwrites_present_fields_only() {
    let mut project = Project::new(1, sample_input(), Utc::now());
    let later = project.created_at + Duration::seconds(5);

    project.apply(
        ProjectPatch {
            title: Some("New Title".to_string()),
            technologies: Some(vec!["Rust".to_string(), "Axum".to_string()]),
            ..Default::default()
        },
        later,
    );

    assert_that!(project.title, eq("New Title"));
    assert_that!(project.description, eq("Y"));
    assert_that!(project.technologies, len(eq(2)));
    assert_eq!(project.updated_at, Some(later));
}

#[test]
fn test_apply_ignores_empty_values() {
    let mut project = Project::new(1, sample_input(), Utc::now());
    let before = project.clone();

    project.apply(
        ProjectPatch {
            title: Some(String::new()),
            description: Some(String::new()),
            technologies: Some(Vec::new()),
            image_url: Some(String::new()),
            live_url: None,
        },
        Utc::now(),
    );

    assert_that!(project.title, eq(&before.title));
    assert_that!(project.description, eq(&before.description));
    assert_eq!(project.technologies, before.technologies);
    assert_that!(project.image_url, eq(&before.image_url));
    assert_that!(project.updated_at, some(anything()));
}

#[test]
fn test_patch_is_empty() {
    assert!(ProjectPatch::default().is_empty());
    assert!(
        ProjectPatch {
            title: Some(String::new()),
            technologies: Some(Vec::new()),
            ..Default::default()
        }
        .is_empty()
    );
    assert!(
        !ProjectPatch {
            live_url: Some("https://example.com".to_string()),
            ..Default::default()
        }
        .is_empty()
    );
}

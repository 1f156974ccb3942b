use pf_core::Project;

use chrono::{DateTime, Utc};

/// Two showcase projects a fresh store can start with
pub fn sample_projects(now: DateTime<Utc>) -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "E-commerce Website".to_string(),
            description: "A full-featured online store with cart functionality".to_string(),
            technologies: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "MongoDB".to_string(),
            ],
            image_url: "https://img.freepik.com/vektor-premium/desain-logo-e-commerce_624194-152.jpg?w=740".to_string(),
            live_url: "https://example.com".to_string(),
            created_at: now,
            updated_at: None,
        },
        Project {
            id: 2,
            title: "Task Management App".to_string(),
            description: "Kanban-style task organizer with drag-and-drop".to_string(),
            technologies: vec!["Vue.js".to_string(), "Firebase".to_string()],
            image_url: pf_core::DEFAULT_IMAGE_URL.to_string(),
            live_url: "https://example.com".to_string(),
            created_at: now,
            updated_at: None,
        },
    ]
}

use pf_config::Config;
use pf_core::ProjectRules;
use pf_store::{MessageLog, ProjectStore, ThrottlePolicy, sample_projects};

use chrono::Utc;

/// Shared application state for REST handlers
#[derive(Clone)]
pub struct AppState {
    pub projects: ProjectStore,
    pub messages: MessageLog,
    pub rules: ProjectRules,
    /// Whether `X-Forwarded-For` decides the client address
    pub trust_forwarded_for: bool,
}

impl AppState {
    pub fn new(projects: ProjectStore, messages: MessageLog, rules: ProjectRules) -> Self {
        Self {
            projects,
            messages,
            rules,
            trust_forwarded_for: true,
        }
    }

    /// Set whether the client address comes from `X-Forwarded-For`
    pub fn with_forwarded_for(mut self, trust: bool) -> Self {
        self.trust_forwarded_for = trust;
        self
    }

    /// Build state from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        let projects = if config.store.seed_sample_projects {
            ProjectStore::with_projects(sample_projects(Utc::now()))
        } else {
            ProjectStore::new()
        };

        // Convert config types for pf-store / pf-core
        let policy = ThrottlePolicy::new(
            config.contact.max_submissions,
            i64::try_from(config.contact.window_secs).unwrap_or(i64::MAX),
        );
        let rules = ProjectRules {
            enabled: config.validation.enabled,
            max_title_length: config.validation.max_title_length,
            max_description_length: config.validation.max_description_length,
        };

        Self::new(projects, MessageLog::new(policy), rules)
            .with_forwarded_for(config.server.trust_forwarded_for)
    }
}

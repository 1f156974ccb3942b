use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

pub const MIN_DESCRIPTION_LENGTH: usize = 1;
pub const MAX_DESCRIPTION_LENGTH: usize = 100_000;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 10_000;

/// Project input validation.
///
/// With `enabled = false` project input is stored as received: no required
/// fields, no length limits. Contact submissions are always validated.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub enabled: bool,
    /// Maximum length for project titles
    pub max_title_length: usize,
    /// Maximum length for project descriptions
    pub max_description_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_title_length < MIN_TITLE_LENGTH || self.max_title_length > MAX_TITLE_LENGTH {
            return Err(ConfigError::invalid(
                "validation",
                format!(
                    "max_title_length must be {}-{}, got {}",
                    MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, self.max_title_length
                ),
            ));
        }

        if self.max_description_length < MIN_DESCRIPTION_LENGTH
            || self.max_description_length > MAX_DESCRIPTION_LENGTH
        {
            return Err(ConfigError::invalid(
                "validation",
                format!(
                    "max_description_length must be {}-{}, got {}",
                    MIN_DESCRIPTION_LENGTH, MAX_DESCRIPTION_LENGTH, self.max_description_length
                ),
            ));
        }

        Ok(())
    }
}

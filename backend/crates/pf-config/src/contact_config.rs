use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Submission ceiling constraints
pub const MIN_MAX_SUBMISSIONS: usize = 1;
pub const MAX_MAX_SUBMISSIONS: usize = 1000;
pub const DEFAULT_MAX_SUBMISSIONS: usize = 3;

pub const MIN_WINDOW_SECS: u64 = 1;
pub const MAX_WINDOW_SECS: u64 = 86_400;
pub const DEFAULT_WINDOW_SECS: u64 = 15 * 60;

/// Contact form throttling.
/// Applied per client address over a trailing window.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Submissions allowed per origin inside the window
    pub max_submissions: usize,
    /// Window duration in seconds
    pub window_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            max_submissions: DEFAULT_MAX_SUBMISSIONS,
            window_secs: DEFAULT_WINDOW_SECS,
        }
    }
}

impl ContactConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_submissions < MIN_MAX_SUBMISSIONS || self.max_submissions > MAX_MAX_SUBMISSIONS
        {
            return Err(ConfigError::invalid(
                "contact",
                format!(
                    "max_submissions must be {}-{}, got {}",
                    MIN_MAX_SUBMISSIONS, MAX_MAX_SUBMISSIONS, self.max_submissions
                ),
            ));
        }

        if self.window_secs < MIN_WINDOW_SECS || self.window_secs > MAX_WINDOW_SECS {
            return Err(ConfigError::invalid(
                "contact",
                format!(
                    "window_secs must be {}-{}, got {}",
                    MIN_WINDOW_SECS, MAX_WINDOW_SECS, self.window_secs
                ),
            ));
        }

        Ok(())
    }
}

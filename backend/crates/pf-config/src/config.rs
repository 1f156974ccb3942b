use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, ContactConfig,
    DEFAULT_CONFIG_DIR, LoggingConfig, ServerConfig, StoreConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
    pub contact: ContactConfig,
    pub store: StoreConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Defaults
    /// 2. `config.toml` in the config directory, if it exists
    /// 3. `.env` in the working directory, if it exists
    /// 4. `PORT`, then `PF_*` environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PF_CONFIG_DIR env var > ./.pf/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|e| ConfigError::ConfigDir { source: e })?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.validation.validate()?;
        self.contact.validate()?;

        if let Some(file) = &self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::invalid(
                "logging",
                "file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (trust X-Forwarded-For: {})",
            self.server.host, self.server.port, self.server.trust_forwarded_for
        );

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );

        info!(
            "  validation: {} (title={}, desc={})",
            if self.validation.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.validation.max_title_length,
            self.validation.max_description_length
        );

        info!(
            "  contact: {} submissions per {}s",
            self.contact.max_submissions, self.contact.window_secs
        );

        info!("  store: seed={}", self.store.seed_sample_projects);
    }

    fn apply_env_overrides(&mut self) {
        // Server. Plain PORT is honored for hosting platforms; PF_SERVER_PORT wins.
        Self::apply_env_parse("PORT", &mut self.server.port);
        Self::apply_env_string("PF_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PF_SERVER_PORT", &mut self.server.port);
        Self::apply_env_bool(
            "PF_SERVER_TRUST_FORWARDED_FOR",
            &mut self.server.trust_forwarded_for,
        );

        // Logging
        Self::apply_env_parse("PF_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PF_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PF_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_bool("PF_VALIDATION_ENABLED", &mut self.validation.enabled);
        Self::apply_env_parse(
            "PF_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "PF_VALIDATION_MAX_DESCRIPTION_LENGTH",
            &mut self.validation.max_description_length,
        );

        // Contact
        Self::apply_env_parse(
            "PF_CONTACT_MAX_SUBMISSIONS",
            &mut self.contact.max_submissions,
        );
        Self::apply_env_parse("PF_CONTACT_WINDOW_SECS", &mut self.contact.window_secs);

        // Store
        Self::apply_env_bool(
            "PF_STORE_SEED_SAMPLE_PROJECTS",
            &mut self.store.seed_sample_projects,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

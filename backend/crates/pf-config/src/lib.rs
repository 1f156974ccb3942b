mod config;
mod contact_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod store_config;
mod validation_config;

pub use config::Config;
pub use contact_config::ContactConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use store_config::StoreConfig;
pub use validation_config::ValidationConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const CONFIG_DIR_ENV: &str = "PF_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".pf";
const CONFIG_FILENAME: &str = "config.toml";

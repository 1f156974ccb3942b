//! fern-backed `log` dispatcher
//!
//! Every line has the shape `[<rfc3339> - LEVEL] message [file:line]`.
//! Level names are colored only when writing to stdout with `colored` set.

use crate::error::{Result as ServerErrorResult, ServerError};

use pf_config::LoggingConfig;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Install the global logger
///
/// `log_file` of None writes to stdout; otherwise lines are appended to the
/// given file and colors are never used.
pub fn initialize(logging: &LoggingConfig, log_file: Option<PathBuf>) -> ServerErrorResult<()> {
    let level_filter = *logging.level;
    let colors = (logging.colored && log_file.is_none()).then(level_colors);

    let output: fern::Output = match &log_file {
        Some(path) => open_append(path)?.into(),
        None => std::io::stdout().into(),
    };

    Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| {
            let level = match &colors {
                Some(colors) => colors.color(record.level()).to_string(),
                None => record.level().to_string(),
            };
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: e.to_string(),
        })?;

    let target = log_file
        .as_deref()
        .map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
    info!("Logger initialized: level={}, output={}", level_filter, target);

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn open_append(path: &Path) -> ServerErrorResult<std::fs::File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::LogFile {
            path: path.display().to_string(),
            source: e,
        })
}

use crate::error::{CliError, Result as CliErrorResult};

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use woms_config::LogLevel;

/// Where log records end up. Stdout carries command output, so the console
/// target is stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr { colored: bool },
    File(PathBuf),
}

impl LogTarget {
    pub fn new(log_file: Option<PathBuf>, colored: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None => Self::Stderr { colored },
        }
    }
}

/// Installs the global fern logger. Must be called at most once per process.
pub fn initialize(level: LogLevel, target: LogTarget) -> CliErrorResult<()> {
    let filter: LevelFilter = *level;

    let dispatch = match &target {
        LogTarget::File(path) => file_dispatch(path)?,
        LogTarget::Stderr { colored: true } => {
            let colors = level_colors();
            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{} - {}] {}",
                        humantime::format_rfc3339_seconds(SystemTime::now()),
                        colors.color(record.level()),
                        message
                    ))
                })
                .chain(std::io::stderr())
        }
        LogTarget::Stderr { colored: false } => Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} - {}] {}",
                    humantime::format_rfc3339_seconds(SystemTime::now()),
                    record.level(),
                    message
                ))
            })
            .chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(filter)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(dispatch)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match target {
        LogTarget::File(path) => log::debug!("Logging at {filter} to {}", path.display()),
        LogTarget::Stderr { .. } => log::debug!("Logging at {filter} to stderr"),
    }

    Ok(())
}

fn file_dispatch(path: &Path) -> CliErrorResult<Dispatch> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::logger(format!("Failed to open log file {}: {e}", path.display())))?;

    Ok(Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} - {:<5}] {} ({})",
                humantime::format_rfc3339_millis(SystemTime::now()),
                record.level(),
                message,
                record.target()
            ))
        })
        .chain(file))
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}


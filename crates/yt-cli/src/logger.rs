//! Log output for the `yt` binary.
//!
//! stdout carries tables and JSON, so records go to stderr or, when
//! `logging.file` is set, are appended to that file without colors.

use crate::error::{CliError, Result as CliResult};

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, debug};

pub fn initialize(level: LevelFilter, log_file: Option<PathBuf>, colored: bool) -> CliResult<()> {
    let colors = (colored && log_file.is_none()).then(level_colors);

    let dispatch = Dispatch::new()
        .level(level)
        .format(move |out, message, record| {
            let tag = match &colors {
                Some(colors) => colors.color(record.level()).to_string(),
                None => record.level().to_string(),
            };
            out.finish(format_args!(
                "[{} - {}] {} [{}:{}]",
                humantime::format_rfc3339(SystemTime::now()),
                tag,
                message,
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
            ))
        });

    let dispatch = match &log_file {
        Some(path) => dispatch.chain(open_append(path)?),
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch.apply().map_err(|e| CliError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    match &log_file {
        Some(path) => debug!("Logging at {} to {}", level, path.display()),
        None => debug!("Logging at {} to stderr", level),
    }
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

fn open_append(path: &Path) -> CliResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}

/// Raise the configured level by the number of `-v` flags
pub fn effective_level(configured: LevelFilter, verbose: u8) -> LevelFilter {
    let requested = match verbose {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    configured.max(requested)
}

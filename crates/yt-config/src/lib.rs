mod config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

/// File name under the home directory
pub const CONFIG_FILE_NAME: &str = ".youtrack-cli.yaml";
/// Env var pointing at an alternative config file
pub const CONFIG_PATH_ENV: &str = "YT_CONFIG";

const DEFAULT_HOURS_PER_DAY: u32 = 6;
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
const MASK_VISIBLE_CHARS: usize = 4;

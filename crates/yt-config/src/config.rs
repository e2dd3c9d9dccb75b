use crate::{
    CONFIG_FILE_NAME, CONFIG_PATH_ENV, ConfigError, ConfigErrorResult, DEFAULT_HOURS_PER_DAY,
    DEFAULT_TIMEOUT_SECS, LogLevel, LoggingConfig, MASK_VISIBLE_CHARS,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracker base URL, e.g. `https://example.youtrack.cloud`
    pub url: String,
    /// Permanent API token sent as a bearer token
    pub token: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub default_sprint: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub board_name: String,
    /// Length of a working day; `1d` in estimations means this many hours
    pub hours_per_day: u32,
    pub timeout_secs: u64,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            token: String::new(),
            default_sprint: String::new(),
            board_name: String::new(),
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load config from the default location.
    ///
    /// Loading order:
    /// 1. YT_CONFIG env var, else ~/.youtrack-cli.yaml
    /// 2. Parse the file if it exists, else use defaults
    /// 3. Apply YT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load a specific file and apply env overrides
    pub fn load_from(path: &Path) -> ConfigErrorResult<Self> {
        let mut config = Self::read_file(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse the file as stored, without env overrides. Missing file = defaults.
    pub fn read_file(path: &Path) -> ConfigErrorResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(path).map_err(ConfigError::io(path))?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(ConfigError::yaml(path))
    }

    /// Get the config file path.
    /// Priority: YT_CONFIG env var > ~/.youtrack-cli.yaml
    pub fn path() -> ConfigErrorResult<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }

        dirs::home_dir()
            .map(|home| home.join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoHomeDir)
    }

    pub fn save(&self) -> ConfigErrorResult<()> {
        self.save_to(&Self::path()?)
    }

    /// Write the file, creating its directory; the file holds a token so it is owner-only on Unix
    pub fn save_to(&self, path: &Path) -> ConfigErrorResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(ConfigError::io(parent))?;
        }

        let data = self.to_yaml()?;
        std::fs::write(path, data).map_err(ConfigError::io(path))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
                .map_err(ConfigError::io(path))?;
        }

        Ok(())
    }

    /// Update a single setting by its command-line key
    #[track_caller]
    pub fn set_value(&mut self, key: &str, value: &str) -> ConfigErrorResult<()> {
        match key {
            "url" => self.url = value.trim_end_matches('/').to_string(),
            "token" => self.token = value.to_string(),
            "sprint" => self.default_sprint = value.to_string(),
            "board" => self.board_name = value.to_string(),
            "hours-per-day" => {
                self.hours_per_day = Self::parse_value(key, value)?;
                if self.hours_per_day == 0 {
                    return Err(ConfigError::validation("hours-per-day must be greater than 0"));
                }
            }
            "timeout" => {
                self.timeout_secs = Self::parse_value(key, value)?;
                if self.timeout_secs == 0 {
                    return Err(ConfigError::validation("timeout must be greater than 0"));
                }
            }
            "log-level" => {
                self.logging.level = LogLevel::from_name(value).ok_or_else(|| {
                    ConfigError::config(format!("invalid value for {key}: {value}"))
                })?;
            }
            _ => return Err(ConfigError::config(format!("unknown config key: {key}"))),
        }
        Ok(())
    }

    #[track_caller]
    fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> ConfigErrorResult<T> {
        value
            .parse()
            .map_err(|_| ConfigError::config(format!("invalid value for {key}: {value}")))
    }

    /// Validate local settings. Call after load().
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.hours_per_day == 0 {
            return Err(ConfigError::validation("hours_per_day must be greater than 0"));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::validation("timeout_secs must be greater than 0"));
        }
        Ok(())
    }

    /// Check the settings every API call needs are present (never contacts the server)
    pub fn validate_remote(&self) -> ConfigErrorResult<()> {
        if self.url.is_empty() {
            return Err(ConfigError::config(
                "tracker URL is not configured, run `yt config set url <url>`",
            ));
        }
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::validation(format!(
                "tracker URL must start with http:// or https://, got '{}'",
                self.url
            )));
        }
        if self.token.is_empty() {
            return Err(ConfigError::config(
                "API token is not configured, run `yt config set token <token>`",
            ));
        }
        Ok(())
    }

    /// Token with everything but the first and last four characters hidden
    pub fn masked_token(&self) -> String {
        let chars: Vec<char> = self.token.chars().collect();
        if chars.len() <= MASK_VISIBLE_CHARS * 2 {
            return self.token.clone();
        }

        let head: String = chars[..MASK_VISIBLE_CHARS].iter().collect();
        let tail: String = chars[chars.len() - MASK_VISIBLE_CHARS..].iter().collect();
        format!("{head}...{tail}")
    }

    pub fn to_yaml(&self) -> ConfigErrorResult<String> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::serde(e.to_string()))
    }

    /// Log configuration summary (NEVER logs the token).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  url: {}", self.url);
        info!(
            "  token: {}",
            if self.token.is_empty() { "unset" } else { "set" }
        );
        info!("  board: {}", self.board_name);
        info!("  default sprint: {}", self.default_sprint);
        info!(
            "  hours per day: {}, timeout: {}s",
            self.hours_per_day, self.timeout_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        Self::apply_env_string("YT_URL", &mut self.url);
        Self::apply_env_string("YT_TOKEN", &mut self.token);
        Self::apply_env_string("YT_DEFAULT_SPRINT", &mut self.default_sprint);
        Self::apply_env_string("YT_BOARD", &mut self.board_name);
        Self::apply_env_parse("YT_HOURS_PER_DAY", &mut self.hours_per_day);
        Self::apply_env_parse("YT_TIMEOUT_SECS", &mut self.timeout_secs);

        // Logging
        Self::apply_env_parse("YT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("YT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("YT_LOG_FILE", &mut self.logging.file);
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

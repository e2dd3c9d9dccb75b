use std::panic::Location;
use std::path::{Path, PathBuf};
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    /// Bad or missing setting; `category` is "Config", "Validation" or "Serde"
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Home directory not found, set YT_CONFIG to choose a config file")]
    NoHomeDir,
}

impl ConfigError {
    #[track_caller]
    fn generic<S: Into<String>>(category: &'static str, message: S) -> Self {
        ConfigError::Generic {
            category,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Unknown key or unparsable value
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::generic("Config", message)
    }

    #[track_caller]
    pub fn serde<S: Into<String>>(message: S) -> Self {
        Self::generic("Serde", message)
    }

    /// Value parsed but is out of range
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::generic("Validation", message)
    }

    /// `map_err` adapter tagging an I/O failure with the file involved
    pub fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self {
        move |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn yaml(path: &Path) -> impl FnOnce(serde_yaml::Error) -> Self {
        move |source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;

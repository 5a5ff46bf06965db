use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Configuration failures. All of them abort startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required setting has no value
    #[error("{setting} is not defined {location}")]
    Missing {
        setting: &'static str,
        location: ErrorLocation,
    },

    /// A setting has a value that cannot be used
    #[error("Invalid {setting}: {message} {location}")]
    Invalid {
        setting: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot resolve config directory: {message} {location}")]
    ConfigDir {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn missing(setting: &'static str) -> Self {
        ConfigError::Missing {
            setting,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid<S: Into<String>>(setting: &'static str, message: S) -> Self {
        ConfigError::Invalid {
            setting,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = std::result::Result<T, ConfigError>;

use crate::{ConfigError, ConfigErrorResult, DEFAULT_BASE_URL, Environment};

use serde::Deserialize;

/// Public-facing application settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Absolute URL this app is reachable at; used for button targets,
    /// share embeds, and the frame handler's calls to its own API
    pub base_url: String,
    pub environment: Environment,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            environment: Environment::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "app.base_url",
                format!("must start with http:// or https://, got '{}'", self.base_url),
            ));
        }

        Ok(())
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

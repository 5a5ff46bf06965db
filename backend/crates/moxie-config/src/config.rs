use crate::{
    AirstackConfig, AppConfig, ConfigError, ConfigErrorResult, DEFAULT_BASE_URL, HubConfig,
    LoggingConfig, ServerConfig,
};

use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub app: AppConfig,
    pub airstack: AirstackConfig,
    pub hub: HubConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for MOXIE_CONFIG_DIR env var, else use ./.moxie/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

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
    /// Priority: MOXIE_CONFIG_DIR env var > ./.moxie/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("MOXIE_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|e| ConfigError::ConfigDir {
                message: format!("cannot determine current working directory: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        Ok(cwd.join(".moxie"))
    }

    /// Validate all configuration.
    /// Call after load() so a missing API key fails at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.app.validate()?;
        self.airstack.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Hub used to validate signed frame messages
    pub fn hub_url(&self) -> String {
        self.hub.resolve_url(self.app.environment)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  app: {} ({})",
            self.app.base_url(),
            self.app.environment
        );
        info!(
            "  airstack: {} (api key {})",
            self.airstack.api_url,
            if self.airstack.api_key().is_some() {
                "set"
            } else {
                "missing"
            }
        );
        info!("  hub: {}", self.hub_url());
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("MOXIE_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("MOXIE_SERVER_PORT", &mut self.server.port);

        // App
        if self.app.base_url == DEFAULT_BASE_URL
            && let Ok(host) = std::env::var("VERCEL_URL")
            && !host.trim().is_empty()
        {
            self.app.base_url = format!("https://{}", host.trim());
        }
        Self::apply_env_string("MOXIE_APP_BASE_URL", &mut self.app.base_url);
        Self::apply_env_parse("MOXIE_ENV", &mut self.app.environment);

        // Airstack
        Self::apply_env_non_blank("AIRSTACK_API_KEY", &mut self.airstack.api_key);
        Self::apply_env_non_blank("MOXIE_AIRSTACK_API_KEY", &mut self.airstack.api_key);
        Self::apply_env_string("MOXIE_AIRSTACK_API_URL", &mut self.airstack.api_url);

        // Hub
        Self::apply_env_option_string("MOXIE_HUB_URL", &mut self.hub.url);

        // Logging
        Self::apply_env_parse("MOXIE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("MOXIE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("MOXIE_LOG_FILE", &mut self.logging.file);
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

    /// Helper: Like `apply_env_option_string`, but a blank value leaves the target alone
    fn apply_env_non_blank(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name)
            && !val.trim().is_empty()
        {
            *target = Some(val);
        }
    }
}

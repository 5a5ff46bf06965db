use crate::{ConfigError, ConfigErrorResult, DEFAULT_AIRSTACK_API_URL};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AirstackConfig {
    /// Required. Sent as `Authorization` to the GraphQL API and as
    /// `x-airstack-hubs` to the production hub.
    pub api_key: Option<String>,
    pub api_url: String,
}

impl Default for AirstackConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: String::from(DEFAULT_AIRSTACK_API_URL),
        }
    }
}

impl AirstackConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.api_key().is_none() {
            return Err(ConfigError::missing("AIRSTACK_API_KEY"));
        }

        if self.api_url.trim().is_empty() {
            return Err(ConfigError::invalid("airstack.api_url", "cannot be empty"));
        }

        Ok(())
    }

    /// The API key, ignoring blank values
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

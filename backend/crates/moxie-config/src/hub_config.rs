use crate::{DEVELOPMENT_HUB_URL, Environment, PRODUCTION_HUB_URL};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Explicit hub URL; when unset the URL follows the environment
    pub url: Option<String>,
}

impl HubConfig {
    pub fn resolve_url(&self, environment: Environment) -> String {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
            _ if environment.is_production() => String::from(PRODUCTION_HUB_URL),
            _ => String::from(DEVELOPMENT_HUB_URL),
        }
    }
}

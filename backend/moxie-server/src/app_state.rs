use crate::ScoreApiClient;
use crate::error::{Result as ServerErrorResult, ServerError};

use moxie_airstack::{AirstackClient, HubClient};
use moxie_config::{Config, Environment};

use log::info;

/// Shared state handed to every handler.
///
/// All members are cheap to clone; nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub airstack: AirstackClient,
    pub hub: HubClient,
    pub score_api: ScoreApiClient,
    pub base_url: String,
    pub environment: Environment,
}

impl AppState {
    /// Build the upstream clients from validated configuration
    pub fn from_config(config: &Config) -> ServerErrorResult<Self> {
        let api_key = config.airstack.api_key().ok_or_else(|| ServerError::Startup {
            message: "AIRSTACK_API_KEY is not defined".to_string(),
        })?;

        let environment = config.app.environment;
        let hub_key = environment.is_production().then_some(api_key);
        let base_url = config.app.base_url().to_string();

        info!("Airstack client initialized ({})", config.airstack.api_url);

        Ok(Self {
            airstack: AirstackClient::new(&config.airstack.api_url, api_key),
            hub: HubClient::new(&config.hub_url(), hub_key),
            score_api: ScoreApiClient::new(&base_url),
            base_url,
            environment,
        })
    }
}

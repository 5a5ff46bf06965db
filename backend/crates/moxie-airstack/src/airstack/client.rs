use crate::airstack::normalize::{earnings_from_stats, profile_from_socials};
use crate::airstack::queries::{MOXIE_EARNINGS_QUERY, USER_SOCIAL_CAPITAL_QUERY};
use crate::airstack::response::{GraphQlError, GraphQlResponse, MoxieEarningsData, SocialsData};
use crate::{UpstreamError, UpstreamResult};

use moxie_core::{EarningsAmount, EarningsSnapshot, Timeframe, UserProfile};

use log::{debug, error};
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Client for the Airstack GraphQL API
#[derive(Clone)]
pub struct AirstackClient {
    pub api_url: String,
    api_key: String,
    client: ReqwestClient,
}

impl AirstackClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `api_url` - GraphQL endpoint (e.g., "https://api.airstack.xyz/gql")
    /// * `api_key` - Airstack API key, sent as the `Authorization` header
    pub fn new(api_url: &str, api_key: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Execute a GraphQL query and return its `data` member
    async fn query<T: DeserializeOwned>(&self, query: &str, variables: Value) -> UpstreamResult<T> {
        #[derive(Serialize)]
        struct GraphQlRequest<'a> {
            query: &'a str,
            variables: Value,
        }

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", &self.api_key)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<GraphQlResponse<Value>>(&bytes)
                .ok()
                .and_then(|body| first_error(body.errors))
                .unwrap_or_else(|| format!("Airstack HTTP error! status: {}", status.as_u16()));
            error!("Airstack API error ({}): {}", status, message);
            return Err(UpstreamError::api(message));
        }

        let body: GraphQlResponse<T> = serde_json::from_slice(&bytes)?;

        if let Some(message) = first_error(body.errors) {
            error!("Airstack API error: {}", message);
            return Err(UpstreamError::api(message));
        }

        body.data
            .ok_or_else(|| UpstreamError::api("Airstack response contained no data"))
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Fetch a user's profile and social capital
    pub async fn get_profile(&self, user_id: &str) -> UpstreamResult<UserProfile> {
        debug!("Fetching profile from Airstack for userId: {}", user_id);

        let data: SocialsData = self
            .query(USER_SOCIAL_CAPITAL_QUERY, json!({ "userId": user_id }))
            .await?;

        profile_from_socials(user_id, data)
    }

    /// Fetch a user's Moxie earnings for one timeframe; no rows is zero
    pub async fn get_earnings(
        &self,
        user_id: &str,
        timeframe: Timeframe,
    ) -> UpstreamResult<EarningsAmount> {
        debug!(
            "Fetching {} Moxie earnings from Airstack for entityId: {}",
            timeframe, user_id
        );

        let data: MoxieEarningsData = self
            .query(
                MOXIE_EARNINGS_QUERY,
                json!({ "entityId": user_id, "timeframe": timeframe.as_str() }),
            )
            .await?;

        Ok(earnings_from_stats(data))
    }

    /// Fetch all three timeframes concurrently
    pub async fn get_earnings_snapshot(&self, user_id: &str) -> UpstreamResult<EarningsSnapshot> {
        let (today, weekly, lifetime) = tokio::try_join!(
            self.get_earnings(user_id, Timeframe::Today),
            self.get_earnings(user_id, Timeframe::Weekly),
            self.get_earnings(user_id, Timeframe::Lifetime),
        )?;

        Ok(EarningsSnapshot {
            today,
            weekly,
            lifetime,
        })
    }
}

fn first_error(errors: Option<Vec<GraphQlError>>) -> Option<String> {
    errors
        .and_then(|errors| errors.into_iter().next())
        .map(|error| error.message)
}

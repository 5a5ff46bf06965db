use crate::hub::response::ValidationResponse;
use crate::{UpstreamError, UpstreamResult, ValidatedMessage};

use log::{debug, warn};
use reqwest::Client as ReqwestClient;

/// Client for a Farcaster hub's HTTP API
#[derive(Clone)]
pub struct HubClient {
    pub hub_url: String,
    api_key: Option<String>,
    client: ReqwestClient,
}

impl HubClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `hub_url` - Hub base URL (e.g., "https://hubs.airstack.xyz")
    /// * `api_key` - Optional key sent as `x-airstack-hubs`
    pub fn new(hub_url: &str, api_key: Option<&str>) -> Self {
        Self {
            hub_url: hub_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Verify a signed frame message
    ///
    /// # Arguments
    /// * `message_bytes_hex` - `trustedData.messageBytes`, hex encoded
    pub async fn validate_message(&self, message_bytes_hex: &str) -> UpstreamResult<ValidatedMessage> {
        let trimmed = message_bytes_hex.trim();
        let bytes = hex::decode(trimmed.strip_prefix("0x").unwrap_or(trimmed))
            .map_err(|e| UpstreamError::invalid_message(format!("messageBytes is not hex: {}", e)))?;

        let url = format!("{}/v1/validateMessage", self.hub_url);
        let mut req = self
            .client
            .post(&url)
            .header("Content-Type", "application/octet-stream")
            .body(bytes);

        if let Some(ref api_key) = self.api_key {
            req = req.header("x-airstack-hubs", api_key);
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Hub rejected validateMessage with status {}", status);
            return Err(UpstreamError::api(format!(
                "Hub HTTP error! status: {}",
                status.as_u16()
            )));
        }

        let body: ValidationResponse = serde_json::from_slice(&response.bytes().await?)?;

        if !body.valid {
            return Err(UpstreamError::invalid_message("hub reported message as invalid"));
        }

        let data = body
            .message
            .and_then(|message| message.data)
            .ok_or_else(|| UpstreamError::invalid_message("validated message has no data"))?;

        debug!("Hub validated frame message from fid {}", data.fid);

        Ok(ValidatedMessage::from(data))
    }
}

use crate::FarscoreResponse;

use moxie_airstack::{UpstreamError, UpstreamResult};
use moxie_core::{EarningsSnapshot, UserProfile};

use log::{debug, error};
use reqwest::{Client as ReqwestClient, Url};
use serde::de::DeserializeOwned;

/// Client for this server's own aggregation routes.
///
/// The frame handler reads profile and earnings through the public REST
/// surface rather than calling Airstack directly.
#[derive(Clone)]
pub struct ScoreApiClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl ScoreApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// GET /api/farscore?userId=
    pub async fn fetch_profile(&self, fid: &str) -> UpstreamResult<UserProfile> {
        let response: FarscoreResponse = self.get("/api/farscore", "userId", fid).await?;
        Ok(response.user_data)
    }

    /// GET /api/moxie-earnings?entityId=
    pub async fn fetch_earnings(&self, fid: &str) -> UpstreamResult<EarningsSnapshot> {
        self.get("/api/moxie-earnings", "entityId", fid).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        param: &str,
        value: &str,
    ) -> UpstreamResult<T> {
        let url = Url::parse_with_params(&format!("{}{}", self.base_url, path), &[(param, value)])
            .map_err(|e| UpstreamError::api(format!("Invalid URL for {}: {}", path, e)))?;

        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            error!("{} responded with status {}", path, status);
            return Err(UpstreamError::api(format!(
                "HTTP error! status: {}",
                status.as_u16()
            )));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

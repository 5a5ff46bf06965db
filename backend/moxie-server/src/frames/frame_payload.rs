//! Body a client POSTs when a frame button is pressed.

use moxie_core::CastId;

use log::debug;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameActionPayload {
    #[serde(default)]
    pub untrusted_data: Option<UntrustedData>,
    #[serde(default)]
    pub trusted_data: Option<TrustedData>,
}

/// Client-reported fields. Not signed; only used where a trusted value is absent.
///
/// The unsigned `fid` is ignored; only a signed message names the requester.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntrustedData {
    pub state: Option<String>,
    pub cast_id: Option<CastId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustedData {
    pub message_bytes: String,
}

impl FrameActionPayload {
    /// Parse a request body; an empty or malformed body is no payload
    pub fn parse(body: &[u8]) -> Option<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return None;
        }

        serde_json::from_slice(body)
            .map_err(|e| debug!("Ignoring unparseable frame payload: {}", e))
            .ok()
    }

    pub fn message_bytes(&self) -> Option<&str> {
        self.trusted_data
            .as_ref()
            .map(|trusted| trusted.message_bytes.as_str())
            .filter(|bytes| !bytes.trim().is_empty())
    }
}

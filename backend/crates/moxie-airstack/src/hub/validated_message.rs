use crate::hub::response::{FrameActionBody, HubMessageData};

use moxie_core::CastId;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::debug;

/// A frame action whose signature the hub has verified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedMessage {
    /// FID of the user who pressed the button
    pub requester_fid: u64,
    pub cast_id: Option<CastId>,
    pub state: Option<String>,
}

impl From<HubMessageData> for ValidatedMessage {
    fn from(data: HubMessageData) -> Self {
        let body = data.frame_action_body.unwrap_or_default();
        let FrameActionBody { cast_id, state } = body;

        Self {
            requester_fid: data.fid,
            cast_id: cast_id.map(|c| CastId {
                fid: c.fid,
                hash: c.hash,
            }),
            state: state.as_deref().and_then(|v| decode_text("state", v)),
        }
    }
}

/// Decode a base64 byte field as UTF-8; empty or undecodable fields are absent
pub(crate) fn decode_text(field: &str, encoded: &str) -> Option<String> {
    if encoded.is_empty() {
        return None;
    }

    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| debug!("Ignoring undecodable {} field: {}", field, e))
        .ok()?;

    String::from_utf8(bytes)
        .map_err(|e| debug!("Ignoring non UTF-8 {} field: {}", field, e))
        .ok()
        .filter(|text| !text.is_empty())
}

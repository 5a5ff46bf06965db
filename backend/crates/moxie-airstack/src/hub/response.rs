//! Wire shapes of the hub's `validateMessage` response.
//!
//! Byte fields such as `state` arrive base64 encoded.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ValidationResponse {
    pub valid: bool,
    #[serde(default)]
    pub message: Option<HubMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HubMessage {
    #[serde(default)]
    pub data: Option<HubMessageData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HubMessageData {
    pub fid: u64,
    #[serde(default)]
    pub frame_action_body: Option<FrameActionBody>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FrameActionBody {
    pub cast_id: Option<HubCastId>,
    pub state: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HubCastId {
    pub fid: u64,
    pub hash: String,
}

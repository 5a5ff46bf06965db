use crate::frames::frame_payload::{FrameActionPayload, UntrustedData};

use moxie_airstack::{HubClient, ValidatedMessage};
use moxie_core::FrameState;

use log::{debug, warn};

/// What a frame request tells us about who pressed what
#[derive(Debug, Default)]
pub struct MessageContext {
    /// Present only when the hub verified the signed message
    pub validated: Option<ValidatedMessage>,
    untrusted_state: Option<String>,
    untrusted_cast_fid: Option<u64>,
}

impl MessageContext {
    /// Validate the payload's signed message with the hub.
    ///
    /// A missing, malformed, or rejected message yields a context without a
    /// validated message; it never fails the request.
    pub async fn from_payload(hub: &HubClient, payload: Option<&FrameActionPayload>) -> Self {
        let Some(payload) = payload else {
            return Self::default();
        };

        let validated = match payload.message_bytes() {
            Some(bytes) => match hub.validate_message(bytes).await {
                Ok(message) => Some(message),
                Err(e) => {
                    warn!("Frame message failed validation: {}", e);
                    None
                }
            },
            None => {
                debug!("Frame payload carries no signed message");
                None
            }
        };

        let untrusted = payload.untrusted_data.as_ref();

        Self {
            validated,
            untrusted_state: untrusted.and_then(|u: &UntrustedData| u.state.clone()),
            untrusted_cast_fid: untrusted.and_then(|u| u.cast_id.as_ref().map(|c| c.fid)),
        }
    }

    /// FID of the user who pressed the button, from the signed message only
    pub fn requester_fid(&self) -> Option<String> {
        self.validated
            .as_ref()
            .map(|message| message.requester_fid.to_string())
    }

    /// Author of the cast a cast action was invoked on
    pub fn cast_author_fid(&self) -> Option<u64> {
        self.validated
            .as_ref()
            .and_then(|message| message.cast_id.as_ref().map(|c| c.fid))
            .or(self.untrusted_cast_fid)
    }

    /// Carried-forward state, preferring the signed copy
    pub fn frame_state(&self) -> FrameState {
        let raw = self
            .validated
            .as_ref()
            .and_then(|message| message.state.as_deref())
            .or(self.untrusted_state.as_deref());

        match raw {
            Some(raw) => FrameState::from_json(raw).unwrap_or_else(|e| {
                debug!("Ignoring unreadable frame state: {}", e);
                FrameState::default()
            }),
            None => FrameState::default(),
        }
    }
}

use crate::{CoreError, Result};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Opaque state carried between frame interactions.
///
/// `last_fid` is only consulted when neither the signed message nor the
/// request URL yields an identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_fid: Option<String>,
}

impl FrameState {
    pub fn for_fid(fid: impl Into<String>) -> Self {
        Self {
            last_fid: Some(fid.into()),
        }
    }

    /// Parse state as sent back by the client. Blank input is an empty state.
    #[track_caller]
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(raw).map_err(|e| CoreError::FrameState {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| CoreError::FrameState {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// The carried-forward identifier, ignoring blank values
    pub fn fid(&self) -> Option<&str> {
        self.last_fid
            .as_deref()
            .map(str::trim)
            .filter(|fid| !fid.is_empty())
    }
}

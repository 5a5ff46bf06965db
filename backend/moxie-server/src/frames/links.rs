//! Outbound URLs placed on frame buttons.

use moxie_core::UserProfile;

use log::warn;
use reqwest::Url;

pub const REPO_URL: &str = "https://github.com/leeknowlton/farcaster-frame-airstack-moxie";
pub const ADD_CAST_ACTION_URL: &str = "https://warpcast.com/~/add-cast-action";
pub const COMPOSE_URL: &str = "https://warpcast.com/~/compose";

const FALLBACK_SHARE_TEXT: &str = "Check out your Moxie Far Score!";

pub struct FrameLinks<'a> {
    base_url: &'a str,
}

impl<'a> FrameLinks<'a> {
    pub fn new(base_url: &'a str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/'),
        }
    }

    /// `{base_url}/frames`, with `?userfid=` when an identifier is known
    pub fn frame_url(&self, fid: Option<&str>) -> String {
        let frames = format!("{}/frames", self.base_url);
        match fid.map(str::trim).filter(|fid| !fid.is_empty()) {
            Some(fid) => with_query(&frames, &[("userfid", fid)]),
            None => frames,
        }
    }

    pub fn cast_action_url(&self) -> String {
        format!("{}/api/cast-action", self.base_url)
    }

    /// Install link for the cast action
    pub fn add_cast_action_url(&self) -> String {
        with_query(ADD_CAST_ACTION_URL, &[("url", &self.cast_action_url())])
    }

    /// Compose link sharing the frame for `fid`
    pub fn share_url(&self, fid: Option<&str>, profile: Option<&UserProfile>) -> String {
        let text = match profile {
            Some(profile) => share_text(profile),
            None => FALLBACK_SHARE_TEXT.to_string(),
        };

        with_query(
            COMPOSE_URL,
            &[("text", &text), ("embeds[]", &self.frame_url(fid))],
        )
    }
}

pub fn share_text(profile: &UserProfile) -> String {
    format!(
        "My Airstack Far Score is {} with a rank of {}! The higher the score, \
         the more my reactions help you earn Moxie. Check out your score on moxiedemo.",
        profile.score_display(),
        profile.rank_display()
    )
}

/// Append form-encoded parameters; an unparseable base is returned unchanged
fn with_query(base: &str, params: &[(&str, &str)]) -> String {
    match Url::parse_with_params(base, params) {
        Ok(url) => url.to_string(),
        Err(e) => {
            warn!("Cannot build URL from {}: {}", base, e);
            base.to_string()
        }
    }
}

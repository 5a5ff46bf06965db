use crate::frames::card::{data_uri, score_svg, splash_svg};
use crate::frames::frame::{Frame, FrameButton};
use crate::frames::links::{FrameLinks, REPO_URL};

use moxie_core::{EarningsSnapshot, FrameState, UserProfile};

use log::warn;

/// The two render states of the stats frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameView {
    Splash,
    Score {
        profile: UserProfile,
        earnings: EarningsSnapshot,
    },
}

impl FrameView {
    /// Build the frame document for this view.
    ///
    /// `fid` is the resolved identifier (if any). It is written back into
    /// the frame state so the next interaction can fall back to it.
    pub fn render(&self, links: &FrameLinks<'_>, fid: Option<&str>) -> Frame {
        let image = match self {
            FrameView::Splash => splash_svg(),
            FrameView::Score { profile, earnings } => score_svg(profile, earnings),
        };

        Frame::new(data_uri(&image), links.frame_url(None))
            .with_state(state_for(fid))
            .with_buttons(self.buttons(links, fid))
    }

    pub fn buttons(&self, links: &FrameLinks<'_>, fid: Option<&str>) -> Vec<FrameButton> {
        match self {
            FrameView::Splash => vec![
                FrameButton::post("View Me", links.frame_url(fid)),
                FrameButton::link("Cast Action", links.add_cast_action_url()),
                FrameButton::link("Frame Repo", REPO_URL),
            ],
            FrameView::Score { profile, .. } => vec![
                FrameButton::post("View", links.frame_url(fid)),
                FrameButton::link("Share", links.share_url(fid, Some(profile))),
                FrameButton::link("Frame Repo", REPO_URL),
            ],
        }
    }
}

fn state_for(fid: Option<&str>) -> Option<String> {
    let fid = fid?;
    FrameState::for_fid(fid)
        .to_json()
        .map_err(|e| warn!("Cannot serialize frame state: {}", e))
        .ok()
}

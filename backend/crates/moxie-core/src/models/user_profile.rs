use crate::{EngagementValues, format_score};

use serde::{Deserialize, Serialize};

const NOT_AVAILABLE: &str = "N/A";

/// A Farcaster account with its Airstack social capital.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub fid: String,
    pub name: String,
    pub username: String,
    pub profile_display_name: String,
    #[serde(default)]
    pub social_capital_score: Option<f64>,
    #[serde(default)]
    pub social_capital_rank: Option<i64>,
    #[serde(default)]
    pub profile_image_url: String,
}

impl UserProfile {
    /// Score with two decimals, or `N/A`
    pub fn score_display(&self) -> String {
        self.social_capital_score
            .map(format_score)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Rank, or `N/A` when the upstream has no rank for this account
    pub fn rank_display(&self) -> String {
        self.social_capital_rank
            .map(|rank| rank.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn engagement(&self) -> Option<EngagementValues> {
        self.social_capital_score.map(EngagementValues::from_score)
    }
}

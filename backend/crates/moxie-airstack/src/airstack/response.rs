//! Wire shapes of Airstack GraphQL responses.
//!
//! Every level is optional: Airstack returns `null` rather than an empty
//! list when a filter matches nothing.

use moxie_core::EarningsAmount;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

// =============================================================================
// Socials
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SocialsData {
    #[serde(rename = "Socials", default)]
    pub socials: Option<Socials>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Socials {
    #[serde(rename = "Social", default)]
    pub social: Option<Vec<Social>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Social {
    pub profile_name: Option<String>,
    pub profile_display_name: Option<String>,
    pub user_id: Option<String>,
    pub profile_image: Option<String>,
    pub profile_image_content_value: Option<ProfileImageContent>,
    pub social_capital: Option<SocialCapital>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProfileImageContent {
    pub image: Option<ProfileImage>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileImage {
    pub extra_small: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SocialCapital {
    pub social_capital_score: Option<f64>,
    pub social_capital_rank: Option<i64>,
}

// =============================================================================
// Moxie earnings
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MoxieEarningsData {
    #[serde(rename = "FarcasterMoxieEarningStats", default)]
    pub stats: Option<MoxieEarningStats>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MoxieEarningStats {
    #[serde(rename = "FarcasterMoxieEarningStat", default)]
    pub stat: Option<Vec<EarningsAmount>>,
}

//! One normalization function per upstream call.

use crate::airstack::response::{MoxieEarningsData, Social, SocialsData};
use crate::{UpstreamError, UpstreamResult};

use moxie_core::{EarningsAmount, UserProfile};

/// First matching social row as a profile; an empty result is `NotFound`.
#[track_caller]
pub(crate) fn profile_from_socials(user_id: &str, data: SocialsData) -> UpstreamResult<UserProfile> {
    let social = data
        .socials
        .and_then(|socials| socials.social)
        .and_then(|rows| rows.into_iter().next())
        .ok_or_else(|| UpstreamError::not_found(user_id))?;

    Ok(profile_from_social(user_id, social))
}

fn profile_from_social(user_id: &str, social: Social) -> UserProfile {
    let profile_name = non_empty(social.profile_name);
    let display_name = non_empty(social.profile_display_name);

    let profile_image_url = social
        .profile_image_content_value
        .and_then(|content| content.image)
        .and_then(|image| non_empty(image.extra_small))
        .or_else(|| non_empty(social.profile_image))
        .unwrap_or_default();

    let (score, rank) = social
        .social_capital
        .map(|capital| (capital.social_capital_score, capital.social_capital_rank))
        .unwrap_or((None, None));

    UserProfile {
        fid: non_empty(social.user_id).unwrap_or_else(|| user_id.to_string()),
        name: display_name
            .clone()
            .or_else(|| profile_name.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        username: profile_name.unwrap_or_else(|| "unknown".to_string()),
        profile_display_name: display_name.unwrap_or_else(|| "N/A".to_string()),
        social_capital_score: score,
        social_capital_rank: rank,
        profile_image_url,
    }
}

/// First earnings row, or zero when the user has none for the timeframe.
pub(crate) fn earnings_from_stats(data: MoxieEarningsData) -> EarningsAmount {
    data.stats
        .and_then(|stats| stats.stat)
        .and_then(|rows| rows.into_iter().next())
        .unwrap_or_default()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

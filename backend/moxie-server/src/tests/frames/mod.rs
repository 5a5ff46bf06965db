mod card;
mod frame;
mod frame_payload;
mod links;
mod message_context;
mod resolve;
mod view;

use moxie_core::{EarningsAmount, EarningsSnapshot, UserProfile};

pub(crate) fn profile(score: Option<f64>, rank: Option<i64>) -> UserProfile {
    UserProfile {
        fid: "602".into(),
        name: "betashop.eth".into(),
        username: "betashop.eth".into(),
        profile_display_name: "Jason".into(),
        social_capital_score: score,
        social_capital_rank: rank,
        profile_image_url: "https://img.test/602.png".into(),
    }
}

pub(crate) fn earnings(today: f64, weekly: f64, lifetime: f64) -> EarningsSnapshot {
    let amount = |all| EarningsAmount {
        all_earnings_amount: all,
        ..EarningsAmount::zero()
    };

    EarningsSnapshot {
        today: amount(today),
        weekly: amount(weekly),
        lifetime: amount(lifetime),
    }
}

/// Decode a `data:image/svg+xml;base64,` URI back into the SVG text
pub(crate) fn decode_svg(uri: &str) -> String {
    use base64::Engine;

    let encoded = uri
        .strip_prefix("data:image/svg+xml;base64,")
        .expect("not an SVG data URI");
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .unwrap();
    String::from_utf8(bytes).unwrap()
}

use super::{decode_svg, earnings, profile};
use crate::frames::card::{data_uri, score_svg, splash_svg};

#[test]
fn test_data_uri_round_trips_svg() {
    let svg = splash_svg();
    let uri = data_uri(&svg);

    assert!(uri.starts_with("data:image/svg+xml;base64,"));
    assert_eq!(decode_svg(&uri), svg);
}

#[test]
fn test_splash_card_shows_placeholders() {
    let svg = splash_svg();

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(">Far Score<"));
    assert!(svg.contains(">--<"));
    assert!(svg.contains(">Rank: --<"));
    assert!(svg.contains(">Moxie Demo Frame<"));
}

#[test]
fn test_score_card_formats_values() {
    let svg = score_svg(
        &profile(Some(42.5), Some(17)),
        &earnings(12.3456, 1500.0, 1_234_567.0),
    );

    assert!(svg.contains(">Jason<"));
    assert!(svg.contains(">@betashop.eth<"));
    assert!(svg.contains(">42.50<"));
    assert!(svg.contains(">Rank: 17<"));
    // Like, reply, recast
    assert!(svg.contains(">127.50<"));
    assert!(svg.contains(">255.00<"));
    // Today, weekly, lifetime
    assert!(svg.contains(">12.35<"));
    assert!(svg.contains(">1.50K<"));
    assert!(svg.contains(">1.23M<"));
}

#[test]
fn test_score_card_without_score_shows_na() {
    let svg = score_svg(&profile(None, None), &earnings(0.0, 0.0, 0.0));

    assert!(svg.contains(">N/A<"));
    assert!(svg.contains(">Rank: N/A<"));
    assert!(svg.contains(">0.00<"));
}

#[test]
fn test_score_card_escapes_user_text() {
    let mut user = profile(Some(1.0), Some(1));
    user.profile_display_name = "<script>&".into();

    let svg = score_svg(&user, &earnings(0.0, 0.0, 0.0));

    assert!(svg.contains("&lt;script&gt;&amp;"));
    assert!(!svg.contains("<script>"));
}

#[test]
fn test_score_card_omits_missing_avatar() {
    let mut user = profile(Some(1.0), Some(1));
    user.profile_image_url = String::new();

    let svg = score_svg(&user, &earnings(0.0, 0.0, 0.0));

    assert!(!svg.contains("<image"));
}

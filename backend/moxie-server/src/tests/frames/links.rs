use super::profile;
use crate::frames::links::{FrameLinks, share_text};

#[test]
fn test_frame_url_with_and_without_fid() {
    let links = FrameLinks::new("https://frames.test/");

    assert_eq!(links.frame_url(None), "https://frames.test/frames");
    assert_eq!(links.frame_url(Some("  ")), "https://frames.test/frames");
    assert_eq!(
        links.frame_url(Some("602")),
        "https://frames.test/frames?userfid=602"
    );
}

#[test]
fn test_add_cast_action_url_encodes_target() {
    let links = FrameLinks::new("https://frames.test");

    assert_eq!(
        links.add_cast_action_url(),
        "https://warpcast.com/~/add-cast-action?url=https%3A%2F%2Fframes.test%2Fapi%2Fcast-action"
    );
}

#[test]
fn test_share_url_embeds_frame_for_fid() {
    let links = FrameLinks::new("https://frames.test");
    let user = profile(Some(42.5), Some(17));

    let url = links.share_url(Some("602"), Some(&user));

    assert!(url.starts_with("https://warpcast.com/~/compose?text="));
    assert!(url.contains("My+Airstack+Far+Score+is+42.50+with+a+rank+of+17%21"));
    assert!(url.contains("embeds%5B%5D=https%3A%2F%2Fframes.test%2Fframes%3Fuserfid%3D602"));
}

#[test]
fn test_share_url_without_profile_uses_fallback_text() {
    let links = FrameLinks::new("https://frames.test");

    let url = links.share_url(None, None);

    assert!(url.contains("Check+out+your+Moxie+Far+Score%21"));
}

#[test]
fn test_share_text_reports_na_rank() {
    let text = share_text(&profile(Some(3.0), None));

    assert!(text.starts_with("My Airstack Far Score is 3.00 with a rank of N/A!"));
}

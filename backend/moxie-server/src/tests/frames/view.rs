use super::{decode_svg, earnings, profile};
use crate::frames::frame::ButtonAction;
use crate::frames::links::{FrameLinks, REPO_URL};
use crate::frames::view::FrameView;

fn labels(view: &FrameView, fid: Option<&str>) -> Vec<String> {
    let links = FrameLinks::new("https://frames.test");
    view.buttons(&links, fid)
        .into_iter()
        .map(|button| button.label)
        .collect()
}

#[test]
fn test_splash_buttons() {
    let links = FrameLinks::new("https://frames.test");
    let buttons = FrameView::Splash.buttons(&links, None);

    assert_eq!(labels(&FrameView::Splash, None), ["View Me", "Cast Action", "Frame Repo"]);
    assert_eq!(buttons[0].action, ButtonAction::Post);
    assert_eq!(buttons[0].target, "https://frames.test/frames");
    assert_eq!(buttons[1].action, ButtonAction::Link);
    assert!(buttons[1].target.starts_with("https://warpcast.com/~/add-cast-action?url="));
    assert_eq!(buttons[2].target, REPO_URL);
}

#[test]
fn test_score_buttons() {
    let view = FrameView::Score {
        profile: profile(Some(42.5), Some(17)),
        earnings: earnings(1.0, 2.0, 3.0),
    };
    let links = FrameLinks::new("https://frames.test");
    let buttons = view.buttons(&links, Some("602"));

    assert_eq!(labels(&view, Some("602")), ["View", "Share", "Frame Repo"]);
    assert_eq!(buttons[0].target, "https://frames.test/frames?userfid=602");
    assert!(buttons[1].target.starts_with("https://warpcast.com/~/compose?text="));
}

#[test]
fn test_render_writes_fid_into_state() {
    let links = FrameLinks::new("https://frames.test");

    let frame = FrameView::Splash.render(&links, Some("602"));

    assert_eq!(frame.state.as_deref(), Some(r#"{"lastFid":"602"}"#));
    assert_eq!(frame.post_url, "https://frames.test/frames");
}

#[test]
fn test_render_without_fid_has_no_state() {
    let links = FrameLinks::new("https://frames.test");

    let frame = FrameView::Splash.render(&links, None);

    assert_eq!(frame.state, None);
}

#[test]
fn test_render_score_image() {
    let view = FrameView::Score {
        profile: profile(Some(42.5), Some(17)),
        earnings: earnings(1.0, 2.0, 3.0),
    };
    let links = FrameLinks::new("https://frames.test");

    let frame = view.render(&links, Some("602"));

    assert!(decode_svg(&frame.image).contains(">Rank: 17<"));
}

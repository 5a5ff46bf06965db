use crate::frames::frame::{ButtonAction, Frame, FrameButton, MAX_BUTTONS};

fn sample_frame() -> Frame {
    Frame::new(
        "data:image/svg+xml;base64,AAAA".into(),
        "https://frames.test/frames".into(),
    )
    .with_state(Some(r#"{"lastFid":"602"}"#.into()))
    .with_buttons(vec![
        FrameButton::post("View", "https://frames.test/frames?userfid=602"),
        FrameButton::link("Frame Repo", "https://github.com/example/repo"),
    ])
}

fn tag<'a>(tags: &'a [(String, String)], property: &str) -> Option<&'a str> {
    tags.iter()
        .find(|(p, _)| p == property)
        .map(|(_, content)| content.as_str())
}

#[test]
fn test_meta_tags_carry_frame_protocol() {
    let tags = sample_frame().meta_tags();

    assert_eq!(tag(&tags, "fc:frame"), Some("vNext"));
    assert_eq!(tag(&tags, "fc:frame:image"), Some("data:image/svg+xml;base64,AAAA"));
    assert_eq!(tag(&tags, "og:image"), Some("data:image/svg+xml;base64,AAAA"));
    assert_eq!(tag(&tags, "fc:frame:image:aspect_ratio"), Some("1.91:1"));
    assert_eq!(tag(&tags, "fc:frame:post_url"), Some("https://frames.test/frames"));
    assert_eq!(tag(&tags, "fc:frame:state"), Some(r#"{"lastFid":"602"}"#));
}

#[test]
fn test_buttons_are_numbered_from_one() {
    let tags = sample_frame().meta_tags();

    assert_eq!(tag(&tags, "fc:frame:button:1"), Some("View"));
    assert_eq!(tag(&tags, "fc:frame:button:1:action"), Some("post"));
    assert_eq!(
        tag(&tags, "fc:frame:button:1:target"),
        Some("https://frames.test/frames?userfid=602")
    );
    assert_eq!(tag(&tags, "fc:frame:button:2"), Some("Frame Repo"));
    assert_eq!(tag(&tags, "fc:frame:button:2:action"), Some("link"));
    assert_eq!(tag(&tags, "fc:frame:button:3"), None);
}

#[test]
fn test_state_tag_omitted_without_state() {
    let frame = sample_frame().with_state(None);

    assert_eq!(tag(&frame.meta_tags(), "fc:frame:state"), None);
}

#[test]
fn test_extra_buttons_are_dropped() {
    let buttons = (0..6)
        .map(|i| FrameButton::post(&format!("B{}", i), "https://frames.test"))
        .collect();
    let frame = sample_frame().with_buttons(buttons);

    let tags = frame.meta_tags();

    assert!(tag(&tags, &format!("fc:frame:button:{}", MAX_BUTTONS)).is_some());
    assert_eq!(tag(&tags, &format!("fc:frame:button:{}", MAX_BUTTONS + 1)), None);
}

#[test]
fn test_to_html_escapes_attribute_values() {
    let html = sample_frame().to_html();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<meta property="fc:frame" content="vNext"/>"#));
    assert!(html.contains(r#"content="{&quot;lastFid&quot;:&quot;602&quot;}""#));
}

#[test]
fn test_button_action_strings() {
    assert_eq!(ButtonAction::Post.as_str(), "post");
    assert_eq!(ButtonAction::Link.as_str(), "link");
}

use crate::frames::resolve::resolve_fid;

use moxie_core::FrameState;

#[test]
fn test_message_fid_wins_over_url_and_state() {
    let state = FrameState::for_fid("333");

    let fid = resolve_fid(Some("111"), Some("222"), &state);

    assert_eq!(fid.as_deref(), Some("111"));
}

#[test]
fn test_url_fid_used_without_message() {
    let state = FrameState::for_fid("333");

    assert_eq!(resolve_fid(None, Some("222"), &state).as_deref(), Some("222"));
}

#[test]
fn test_state_fid_is_last_resort() {
    let state = FrameState::for_fid("333");

    assert_eq!(resolve_fid(None, None, &state).as_deref(), Some("333"));
}

#[test]
fn test_blank_values_are_skipped() {
    let state = FrameState::for_fid("333");

    assert_eq!(resolve_fid(Some(""), Some("  "), &state).as_deref(), Some("333"));
}

#[test]
fn test_nothing_resolves_to_none() {
    assert_eq!(resolve_fid(None, None, &FrameState::default()), None);
}

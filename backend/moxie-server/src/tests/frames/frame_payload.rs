use crate::frames::frame_payload::FrameActionPayload;

#[test]
fn test_parse_full_payload() {
    let body = br#"{
        "untrustedData": {
            "fid": 111,
            "url": "https://frames.test/frames",
            "buttonIndex": 1,
            "state": "{\"lastFid\":\"333\"}",
            "castId": { "fid": 226, "hash": "0xabc" }
        },
        "trustedData": { "messageBytes": "0a0b0c" }
    }"#;

    let payload = FrameActionPayload::parse(body).unwrap();
    let untrusted = payload.untrusted_data.as_ref().unwrap();

    assert_eq!(untrusted.state.as_deref(), Some(r#"{"lastFid":"333"}"#));
    assert_eq!(untrusted.cast_id.as_ref().map(|c| c.fid), Some(226));
    assert_eq!(payload.message_bytes(), Some("0a0b0c"));
}

#[test]
fn test_parse_empty_body_is_none() {
    assert!(FrameActionPayload::parse(b"").is_none());
    assert!(FrameActionPayload::parse(b"  \n").is_none());
}

#[test]
fn test_parse_malformed_body_is_none() {
    assert!(FrameActionPayload::parse(b"not json").is_none());
}

#[test]
fn test_blank_message_bytes_are_absent() {
    let payload =
        FrameActionPayload::parse(br#"{"trustedData": {"messageBytes": ""}}"#).unwrap();

    assert_eq!(payload.message_bytes(), None);
}

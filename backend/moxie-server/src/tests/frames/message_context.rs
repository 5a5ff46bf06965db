use crate::frames::frame_payload::FrameActionPayload;
use crate::frames::message_context::MessageContext;

use moxie_airstack::HubClient;
use moxie_core::FrameState;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Hub that accepts every message as signed by fid 111 on a cast by fid 226
async fn accepting_hub(state_base64: &str) -> MockServer {
    let hub = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/validateMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "valid": true,
            "message": {
                "data": {
                    "fid": 111,
                    "frameActionBody": {
                        "castId": { "fid": 226, "hash": "0xabc" },
                        "state": state_base64
                    }
                }
            }
        })))
        .mount(&hub)
        .await;
    hub
}

fn signed_payload(untrusted: Value) -> FrameActionPayload {
    let body = json!({
        "untrustedData": untrusted,
        "trustedData": { "messageBytes": "0a0b0c" }
    });
    FrameActionPayload::parse(body.to_string().as_bytes()).unwrap()
}

#[test]
fn test_default_context_is_empty() {
    let context = MessageContext::default();

    assert_eq!(context.requester_fid(), None);
    assert_eq!(context.cast_author_fid(), None);
    assert_eq!(context.frame_state(), FrameState::default());
}

#[tokio::test]
async fn test_validated_message_supplies_fid_and_state() {
    // {"lastFid":"333"}
    let hub = accepting_hub("eyJsYXN0RmlkIjoiMzMzIn0=").await;
    let client = HubClient::new(&hub.uri(), None);
    let payload = signed_payload(json!({ "fid": 999, "state": "{\"lastFid\":\"444\"}" }));

    let context = MessageContext::from_payload(&client, Some(&payload)).await;

    assert_eq!(context.requester_fid().as_deref(), Some("111"));
    assert_eq!(context.cast_author_fid(), Some(226));
    assert_eq!(context.frame_state().fid(), Some("333"));
}

#[tokio::test]
async fn test_unreadable_signed_state_is_empty() {
    // "not json"
    let hub = accepting_hub("bm90IGpzb24=").await;
    let client = HubClient::new(&hub.uri(), None);
    let payload = signed_payload(json!({ "fid": 111 }));

    let context = MessageContext::from_payload(&client, Some(&payload)).await;

    assert_eq!(context.requester_fid().as_deref(), Some("111"));
    assert_eq!(context.frame_state(), FrameState::default());
}

#[tokio::test]
async fn test_payload_without_signature_uses_untrusted_fields_only() {
    // Never contacted: there are no message bytes to validate
    let hub = HubClient::new("http://127.0.0.1:9", None);
    let payload = FrameActionPayload::parse(
        br#"{"untrustedData": {"fid": 111, "state": "{\"lastFid\":\"333\"}", "castId": {"fid": 226, "hash": "0x1"}}}"#,
    );

    let context = MessageContext::from_payload(&hub, payload.as_ref()).await;

    // Unsigned fid is never trusted as the requester
    assert_eq!(context.requester_fid(), None);
    assert_eq!(context.cast_author_fid(), Some(226));
    assert_eq!(context.frame_state().fid(), Some("333"));
}

#[tokio::test]
async fn test_no_payload_is_empty_context() {
    let hub = HubClient::new("http://127.0.0.1:9", None);

    let context = MessageContext::from_payload(&hub, None).await;

    assert!(context.validated.is_none());
}

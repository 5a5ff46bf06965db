//! Cast action handlers
//!
//! The action opens the stats frame for the author of the cast it was
//! invoked on.

use crate::frames::frame_payload::FrameActionPayload;
use crate::frames::links::FrameLinks;
use crate::frames::message_context::MessageContext;
use crate::{AppState, CastActionFrameResponse, CastActionMessage, CastActionMetadata};

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{info, warn};

/// GET /api/cast-action
pub async fn cast_action_metadata(State(state): State<AppState>) -> Json<CastActionMetadata> {
    Json(CastActionMetadata::new(&state.base_url))
}

/// POST /api/cast-action
///
/// Redirects into the frame with the cast author's FID pre-filled
pub async fn cast_action_trigger(State(state): State<AppState>, body: Bytes) -> Response {
    let payload = FrameActionPayload::parse(&body);
    let context = MessageContext::from_payload(&state.hub, payload.as_ref()).await;

    let Some(cast_fid) = context.cast_author_fid() else {
        warn!("Cast action invoked without a cast id");
        return (
            StatusCode::BAD_REQUEST,
            Json(CastActionMessage {
                message: "Could not determine the cast author".to_string(),
            }),
        )
            .into_response();
    };

    info!("Cast Action FID: {}", cast_fid);

    let fid = cast_fid.to_string();
    let frame_url = FrameLinks::new(&state.base_url).frame_url(Some(fid.as_str()));

    Json(CastActionFrameResponse::new(frame_url)).into_response()
}

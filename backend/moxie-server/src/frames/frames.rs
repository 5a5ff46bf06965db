//! Frame route handlers
//!
//! Both methods resolve an FID, fetch stats through the aggregation routes,
//! and render Score or Splash. Nothing here returns an error to the client.

use crate::AppState;
use crate::frames::frame_payload::FrameActionPayload;
use crate::frames::frame_query::FrameQuery;
use crate::frames::links::FrameLinks;
use crate::frames::message_context::MessageContext;
use crate::frames::resolve::resolve_fid;
use crate::frames::view::FrameView;

use axum::{
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    response::Html,
};
use log::{debug, error, info, warn};

/// GET /frames
pub async fn frame_get(
    State(state): State<AppState>,
    query: Result<Query<FrameQuery>, QueryRejection>,
) -> Html<String> {
    let query = frame_query(query);
    render(&state, &MessageContext::default(), &query).await
}

/// POST /frames
pub async fn frame_post(
    State(state): State<AppState>,
    query: Result<Query<FrameQuery>, QueryRejection>,
    body: Bytes,
) -> Html<String> {
    let query = frame_query(query);
    let payload = FrameActionPayload::parse(&body);
    let context = MessageContext::from_payload(&state.hub, payload.as_ref()).await;

    render(&state, &context, &query).await
}

/// An unparseable query string is treated as no query at all
fn frame_query(query: Result<Query<FrameQuery>, QueryRejection>) -> FrameQuery {
    match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!("Ignoring malformed frame query: {}", rejection.body_text());
            FrameQuery::default()
        }
    }
}

pub async fn render(state: &AppState, context: &MessageContext, query: &FrameQuery) -> Html<String> {
    let message_fid = context.requester_fid();
    let frame_state = context.frame_state();

    let fid = resolve_fid(
        message_fid.as_deref(),
        query.userfid.as_deref(),
        &frame_state,
    );
    info!("Final FID used: {:?}", fid);

    let view = match fid.as_deref() {
        Some(fid) => load_view(state, fid).await,
        None => FrameView::Splash,
    };

    let links = FrameLinks::new(&state.base_url);
    Html(view.render(&links, fid.as_deref()).to_html())
}

/// Fetch profile and earnings concurrently; any failure degrades to Splash
pub async fn load_view(state: &AppState, fid: &str) -> FrameView {
    let (profile, earnings) = tokio::join!(
        state.score_api.fetch_profile(fid),
        state.score_api.fetch_earnings(fid),
    );

    match (profile, earnings) {
        (Ok(profile), Ok(earnings)) => {
            debug!("Rendering score frame for {}", fid);
            FrameView::Score { profile, earnings }
        }
        (profile, earnings) => {
            if let Err(e) = profile {
                error!("Error fetching user data for {}: {}", fid, e);
            }
            if let Err(e) = earnings {
                error!("Error fetching Moxie data for {}: {}", fid, e);
            }
            FrameView::Splash
        }
    }
}

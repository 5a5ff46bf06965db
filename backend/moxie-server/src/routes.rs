use crate::api::cast_action::cast_action::{cast_action_metadata, cast_action_trigger};
use crate::api::error::handle_panic;
use crate::api::farscore::farscore::get_farscore;
use crate::api::moxie_earnings::moxie_earnings::get_moxie_earnings;
use crate::frames::frames::{frame_get, frame_post};
use crate::{AppState, health, page};

use axum::{Router, routing::get};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Page shell
        .route("/", get(page::index))
        // Health check
        .route("/health", get(health::health_check))
        // Frame
        .route("/frames", get(frame_get).post(frame_post))
        // Aggregation API
        .route("/api/farscore", get(get_farscore))
        .route("/api/moxie-earnings", get(get_moxie_earnings))
        // Cast action
        .route(
            "/api/cast-action",
            get(cast_action_metadata).post(cast_action_trigger),
        )
        // Add shared state
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        // Clients fetch frames and actions cross-origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

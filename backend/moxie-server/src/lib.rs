pub mod api;
pub mod app_state;
pub mod error;
pub mod frames;
pub mod health;
pub mod html;
pub mod logger;
pub mod page;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    cast_action::{
        cast_action::{cast_action_metadata, cast_action_trigger},
        cast_action_metadata::CastActionMetadata,
        cast_action_response::{CastActionFrameResponse, CastActionMessage},
    },
    error::ApiError,
    error::Result as ApiResult,
    farscore::{farscore::get_farscore, farscore_query::FarscoreQuery, farscore_response::FarscoreResponse},
    moxie_earnings::{
        moxie_earnings::get_moxie_earnings, moxie_earnings_query::MoxieEarningsQuery,
    },
};
pub use app_state::AppState;
pub use frames::{
    frame::{ButtonAction, Frame, FrameButton},
    frame_payload::FrameActionPayload,
    frame_query::FrameQuery,
    score_client::ScoreApiClient,
    view::FrameView,
};

pub use crate::routes::build_router;

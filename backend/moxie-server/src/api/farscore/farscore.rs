//! Far Score REST API handler

use crate::{ApiError, ApiResult, AppState, FarscoreQuery, FarscoreResponse};

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use log::info;

/// GET /api/farscore?userId=
///
/// Profile and social capital for one FID
pub async fn get_farscore(
    State(state): State<AppState>,
    query: Result<Query<FarscoreQuery>, QueryRejection>,
) -> ApiResult<Json<FarscoreResponse>> {
    let Query(query) = query?;
    let user_id = required(query.user_id, "userId")?;
    info!("Fetching Far Score for userId: {}", user_id);

    let user_data = state.airstack.get_profile(&user_id).await?;

    Ok(Json(FarscoreResponse { user_data }))
}

/// Trimmed, non-empty parameter value
#[track_caller]
pub(crate) fn required(value: Option<String>, name: &str) -> ApiResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::missing_param(name))
}

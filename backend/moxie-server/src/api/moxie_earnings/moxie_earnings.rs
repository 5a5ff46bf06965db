//! Moxie earnings REST API handler

use crate::api::farscore::farscore::required;
use crate::{ApiError, ApiResult, AppState, MoxieEarningsQuery};

use moxie_airstack::UpstreamError;
use moxie_core::EarningsSnapshot;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use log::{error, info};

const EARNINGS_ERROR_MESSAGE: &str = "Error fetching Moxie earnings data";

/// GET /api/moxie-earnings?entityId=
///
/// Today, weekly and lifetime earnings. Timeframes without rows are zero.
pub async fn get_moxie_earnings(
    State(state): State<AppState>,
    query: Result<Query<MoxieEarningsQuery>, QueryRejection>,
) -> ApiResult<Json<EarningsSnapshot>> {
    let Query(query) = query?;
    let entity_id = required(query.entity_id, "entityId")?;
    info!("Fetching Moxie earnings for entityId: {}", entity_id);

    let snapshot = state
        .airstack
        .get_earnings_snapshot(&entity_id)
        .await
        .map_err(|e| match e {
            UpstreamError::Json { .. } => ApiError::from(e),
            _ => {
                error!("Airstack API error: {}", e);
                ApiError::upstream(EARNINGS_ERROR_MESSAGE)
            }
        })?;

    Ok(Json(snapshot))
}

use crate::ApiError;
use crate::api::error::{UNEXPECTED_ERROR_MESSAGE, handle_panic};

use moxie_airstack::UpstreamError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_missing_param_returns_400() {
    let response = ApiError::missing_param("userId").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "userId is required");
}

#[tokio::test]
async fn test_not_found_upstream_returns_404() {
    let error = ApiError::from(UpstreamError::not_found("999999999"));
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "No user data found for 999999999");
}

#[tokio::test]
async fn test_api_upstream_error_passes_message_through() {
    let error = ApiError::from(UpstreamError::api("Airstack HTTP error! status: 503"));
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Airstack HTTP error! status: 503");
}

#[tokio::test]
async fn test_internal_error_hides_detail() {
    let error = ApiError::Internal {
        message: "secret detail".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], UNEXPECTED_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_json_upstream_error_is_internal() {
    let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = ApiError::from(UpstreamError::from_json(parse_error));

    assert!(matches!(error, ApiError::Internal { .. }));
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_handle_panic_returns_generic_500() {
    let response = handle_panic(Box::new("boom"));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], UNEXPECTED_ERROR_MESSAGE);
}

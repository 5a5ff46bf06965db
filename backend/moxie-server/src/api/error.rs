//! REST API error types
//!
//! Every failure is rendered as `{"error": "<message>"}` with a matching
//! status code. Internal failures never leak their detail to the caller.

use moxie_airstack::UpstreamError;

use std::any::Any;
use std::panic::Location;

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid request parameter (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Upstream has no data for the requested entity (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Upstream reported an error or was unreachable (500)
    #[error("Upstream error: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },

    /// Anything else (500, generic message)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// Required query parameter absent or blank
    #[track_caller]
    pub fn missing_param(field: &str) -> Self {
        ApiError::Validation {
            message: format!("{} is required", field),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        ApiError::Upstream {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Upstream { .. } | ApiError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let status = self.status();
        let error = match self {
            ApiError::Validation { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Upstream { message, .. } => message,
            ApiError::Internal { .. } => UNEXPECTED_ERROR_MESSAGE.to_string(),
        };

        (status, Json(ApiErrorResponse { error })).into_response()
    }
}

/// Convert upstream client errors to API errors
impl From<UpstreamError> for ApiError {
    #[track_caller]
    fn from(e: UpstreamError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            UpstreamError::NotFound { .. } => ApiError::NotFound {
                message: e.public_message(),
                location,
            },
            UpstreamError::Json { .. } => ApiError::Internal {
                message: e.to_string(),
                location,
            },
            UpstreamError::Api { .. }
            | UpstreamError::Http { .. }
            | UpstreamError::InvalidMessage { .. } => ApiError::Upstream {
                message: e.public_message(),
                location,
            },
        }
    }
}

/// Malformed query strings (duplicate keys, bad encoding) are validation failures
impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Panic handler for `CatchPanicLayer`: the caller only ever sees the generic 500
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal {
        message: format!("Handler panicked: {}", detail),
        location: ErrorLocation::from(Location::caller()),
    }
    .into_response()
}

pub type Result<T> = std::result::Result<T, ApiError>;

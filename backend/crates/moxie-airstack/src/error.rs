use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur while talking to Airstack or the hub
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Upstream API error: {message} {location}")]
    Api {
        message: String,
        location: ErrorLocation,
    },

    #[error("No user data found for {user_id} {location}")]
    NotFound {
        user_id: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid frame message: {message} {location}")]
    InvalidMessage {
        message: String,
        location: ErrorLocation,
    },
}

impl UpstreamError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        UpstreamError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        UpstreamError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api<S: Into<String>>(message: S) -> Self {
        UpstreamError::Api {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a not-found error with location
    #[track_caller]
    pub fn not_found<S: Into<String>>(user_id: S) -> Self {
        UpstreamError::NotFound {
            user_id: user_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an invalid-message error with location
    #[track_caller]
    pub fn invalid_message<S: Into<String>>(message: S) -> Self {
        UpstreamError::InvalidMessage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message safe to show to API callers (no source location)
    pub fn public_message(&self) -> String {
        match self {
            UpstreamError::Http { message, .. }
            | UpstreamError::Api { message, .. }
            | UpstreamError::Json { message, .. }
            | UpstreamError::InvalidMessage { message, .. } => message.clone(),
            UpstreamError::NotFound { user_id, .. } => {
                format!("No user data found for {}", user_id)
            }
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for UpstreamError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        UpstreamError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, UpstreamError>;

use crate::models::lighthouse::Strategy;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// The only failure text an analysis ever shows to the user.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to analyze website. Please check the URL and try again.";

// Why a runPagespeed call failed. Logged, never shown.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{strategy} analysis returned HTTP {status}")]
    Status {
        strategy: Strategy,
        status: reqwest::StatusCode,
    },
    #[error("{strategy} analysis request failed: {source}")]
    Transport {
        strategy: Strategy,
        #[source]
        source: reqwest::Error,
    },
    #[error("{strategy} analysis returned an unreadable report: {source}")]
    Decode {
        strategy: Strategy,
        #[source]
        source: serde_json::Error,
    },
}

impl AnalysisError {
    pub fn strategy(&self) -> Strategy {
        match self {
            AnalysisError::Status { strategy, .. }
            | AnalysisError::Transport { strategy, .. }
            | AnalysisError::Decode { strategy, .. } => *strategy,
        }
    }

    pub fn user_message(&self) -> &'static str {
        ANALYSIS_FAILED_MESSAGE
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { name: &'static str, value: String },
    #[error("{name} is not a valid URL: {value:?}")]
    InvalidEndpoint { name: &'static str, value: String },
    #[error("{name} is not a valid socket address: {value:?}")]
    InvalidBindAddr { name: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("session {0} not found")]
    SessionNotFound(String),
    #[error("invalid session id {0:?}")]
    InvalidSessionId(String),
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidSessionId(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::SessionNotFound(_) => "session_not_found",
            ApiError::InvalidSessionId(_) => "invalid_session_id",
            ApiError::InvalidBody(_) => "invalid_body",
            ApiError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.code(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

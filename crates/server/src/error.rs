// crates/server/src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use docdeck_client::ClientError;
use docdeck_core::{MetadataError, PaginateError};
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

/// Structured JSON error response for API errors
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../../src/types/generated/")]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// API error types that map to HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Pagination error: {0}")]
    Paginate(#[from] PaginateError),

    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    #[error("Service error: {0}")]
    Upstream(#[from] ClientError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(message = %msg, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("Bad request", msg.clone()),
                )
            }
            ApiError::Paginate(err) => {
                tracing::warn!(error = %err, "Invalid pagination request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("Invalid pagination request", err.to_string()),
                )
            }
            ApiError::Metadata(err) => {
                tracing::warn!(error = %err, "Invalid metadata");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("Invalid metadata", err.to_string()),
                )
            }
            ApiError::Upstream(client_err) => return upstream_response(client_err),
            ApiError::Internal(msg) => {
                tracing::error!(message = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Map a service-client failure onto the panel's status codes.
///
/// Input mistakes the service catches come back as 4xx; failures of the
/// service itself surface as 502 so the frontend can distinguish "fix your
/// form" from "the backend is down".
fn upstream_response(err: &ClientError) -> Response {
    let (status, error_response) = match err {
        ClientError::NotConfigured(what) => {
            tracing::warn!(missing = %what, "Service connection not configured");
            (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_details("Service connection not configured", *what),
            )
        }
        ClientError::Submission(msg) => {
            tracing::warn!(message = %msg, "Invalid submission");
            (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_details("Invalid submission", msg.clone()),
            )
        }
        ClientError::Metadata(meta_err) => {
            tracing::warn!(error = %meta_err, "Invalid metadata");
            (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_details("Invalid metadata", meta_err.to_string()),
            )
        }
        ClientError::Validation { detail } => {
            tracing::warn!(detail = %detail, "Service rejected the submission");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::with_details("Validation error", detail.clone()),
            )
        }
        ClientError::Api { status, message } => {
            tracing::error!(status = %status, message = %message, "Service request failed");
            (
                StatusCode::BAD_GATEWAY,
                ErrorResponse::with_details("Service request failed", format!("HTTP {status}")),
            )
        }
        ClientError::Transport(transport_err) => {
            tracing::error!(error = %transport_err, "Cannot reach the document service");
            (
                StatusCode::BAD_GATEWAY,
                ErrorResponse::new("Cannot reach the document service"),
            )
        }
        ClientError::EmptyReport | ClientError::Decode { .. } => {
            tracing::error!(error = %err, "Unexpected service response");
            (
                StatusCode::BAD_GATEWAY,
                ErrorResponse::with_details("Unexpected service response", err.to_string()),
            )
        }
    };

    (status, Json(error_response)).into_response()
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

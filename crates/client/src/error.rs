// crates/client/src/error.rs
use docdeck_core::MetadataError;
use thiserror::Error;

/// Errors talking to the remote document-processing service.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Service is not configured: {0}")]
    NotConfigured(&'static str),

    #[error("Invalid submission: {0}")]
    Submission(String),

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// HTTP 422 from the service. Kept separate from `Api` so the panel can
    /// show the service's own validation message next to the form.
    #[error("Service rejected the submission: {detail}")]
    Validation { detail: String },

    #[error("Service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Service response had no report payload")]
    EmptyReport,

    #[error("Could not decode service report: {message}")]
    Decode { message: String },
}

impl ClientError {
    pub fn submission(message: impl Into<String>) -> Self {
        Self::Submission(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

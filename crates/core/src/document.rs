// crates/core/src/document.rs
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::status::DocumentStatus;

/// Opaque job identifier assigned by the remote service.
pub type JobId = String;

/// One document as reported by the remote service's listing endpoint.
///
/// Timestamps stay RFC 3339 strings on the wire; they are only parsed where
/// the panel needs a display value (see `timefmt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../src/types/generated/")]
pub struct DocumentRecord {
    pub id: String,
    pub job_id: JobId,
    pub name: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
    /// Original URL for documents submitted by link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<String>,
}

impl DocumentRecord {
    /// Minimal record, mostly useful in tests and fixtures.
    pub fn new(
        id: impl Into<String>,
        job_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            job_id: job_id.into(),
            name: name.into(),
            status: DocumentStatus::Pending,
            mimetype: None,
            source: None,
            metadata: None,
            created_on: None,
            completed_on: None,
        }
    }

    pub fn with_status(mut self, status: DocumentStatus) -> Self {
        self.status = status;
        self
    }
}

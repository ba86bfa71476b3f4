// crates/client/src/lib.rs
//! HTTP client for the remote document-processing service.
//!
//! The service exposes its operations as action endpoints under
//! `{base_url}/action/walker/{action}/{operation}`, all returning report
//! envelopes. This crate owns the wire protocol: multipart submission,
//! paginated listing retrieval, cancel/delete calls, and envelope decoding.

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod submit;

pub use client::{build_http_client, DeepDocClient, DocumentListing, DocumentRef};
pub use config::ServiceConfig;
pub use envelope::ReportEnvelope;
pub use error::ClientError;
pub use submit::{parse_url_lines, DocumentSubmission, FileUpload};

// crates/server/src/routes/documents.rs
//! Document submission.
//!
//! - POST /documents — multipart form: repeated `files` parts, newline-
//!   separated `urls`, JSON-object-per-line `metadata`, and the page-range /
//!   language / embeddings options.

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use docdeck_client::{parse_url_lines, DocumentSubmission, FileUpload};
use docdeck_core::parse_metadata_lines;
use serde::Serialize;
use ts_rs::TS;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Axum's default body limit is 2 MB; document batches are routinely larger.
const MAX_UPLOAD_BYTES: usize = 256 * 1024 * 1024;

/// Acknowledgement for a submission: the job the batch runs under and how
/// many documents went into it.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../../src/types/generated/")]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct SubmitResponse {
    pub job_id: String,
    pub submitted: usize,
}

fn bad_field(field: &str, err: impl std::fmt::Display) -> ApiError {
    ApiError::BadRequest(format!("invalid {field} field: {err}"))
}

fn parse_number<T: std::str::FromStr>(field: &str, text: &str) -> Result<T, ApiError>
where
    T::Err: std::fmt::Display,
{
    text.trim().parse().map_err(|e| bad_field(field, e))
}

fn parse_flag(field: &str, text: &str) -> Result<bool, ApiError> {
    match text.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(bad_field(field, format!("expected a boolean, got {other:?}"))),
    }
}

/// Read the multipart form into a `DocumentSubmission`.
async fn read_submission(mut multipart: Multipart) -> Result<DocumentSubmission, ApiError> {
    let mut submission = DocumentSubmission::default();
    let mut metadata_text = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("malformed multipart request: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "files" => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| bad_field("files", "missing filename"))?;
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(|e| bad_field("files", e))?;

                let mut upload = FileUpload::new(file_name, bytes.to_vec());
                if let Some(content_type) = content_type {
                    upload = upload.with_content_type(content_type);
                }
                submission.files.push(upload);
            }
            "urls" => {
                let text = field.text().await.map_err(|e| bad_field("urls", e))?;
                submission.urls = parse_url_lines(&text);
            }
            "metadata" => {
                metadata_text = field.text().await.map_err(|e| bad_field("metadata", e))?;
            }
            "from_page" => {
                let text = field.text().await.map_err(|e| bad_field("from_page", e))?;
                submission.from_page = parse_number("from_page", &text)?;
            }
            "to_page" => {
                let text = field.text().await.map_err(|e| bad_field("to_page", e))?;
                submission.to_page = parse_number("to_page", &text)?;
            }
            "lang" => {
                submission.lang = field.text().await.map_err(|e| bad_field("lang", e))?;
            }
            "with_embeddings" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| bad_field("with_embeddings", e))?;
                submission.with_embeddings = parse_flag("with_embeddings", &text)?;
            }
            // Unknown fields are ignored so an older frontend keeps working.
            _ => {}
        }
    }

    submission.metadatas = parse_metadata_lines(&metadata_text)?;
    Ok(submission)
}

/// POST /api/documents — submit documents for processing.
async fn submit_documents(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> ApiResult<Json<SubmitResponse>> {
    let submission = read_submission(multipart).await?;
    let submitted = submission.document_count();

    let client = state.client()?;
    let job_id = client.add_documents(submission).await?;

    tracing::info!(job_id = %job_id, submitted, "Submitted documents");
    Ok(Json(SubmitResponse { job_id, submitted }))
}

/// Build the documents router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/documents", post(submit_documents))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

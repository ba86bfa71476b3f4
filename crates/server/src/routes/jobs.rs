// crates/server/src/routes/jobs.rs
//! Job listing and job-level actions.
//!
//! - GET    /jobs — one page of the panel, grouped by job, newest first
//! - GET    /jobs/stream — SSE auto-refresh while documents are processing
//! - POST   /jobs/{job_id}/cancel — cancel a job still in flight
//! - DELETE /jobs/{job_id} — delete a job and all its documents
//! - DELETE /jobs/{job_id}/documents/{doc_id} — delete one document

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::response::sse::{Event, Sse};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use docdeck_client::DocumentRef;
use serde::Serialize;
use ts_rs::TS;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::view::{build_job_list, JobListView, PanelQuery, MAX_PER_PAGE, POLL_INTERVAL_SECS};

/// Acknowledgement for job-level actions.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../../src/types/generated/")]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct JobActionResponse {
    pub job_id: String,
    pub action: String,
}

fn checked_query(query: PanelQuery) -> Result<PanelQuery, ApiError> {
    if query.per_page == 0 || query.per_page > MAX_PER_PAGE {
        return Err(ApiError::BadRequest(format!(
            "per_page must be between 1 and {MAX_PER_PAGE} (got {})",
            query.per_page
        )));
    }
    Ok(query)
}

/// Fetch the full remote listing and render one panel page from it.
async fn render_page(state: &AppState, query: PanelQuery) -> ApiResult<JobListView> {
    let client = state.client()?;
    let documents = client.fetch_all_documents().await?;
    Ok(build_job_list(documents, query)?)
}

/// GET /api/jobs — one page of jobs with their documents.
async fn list_jobs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PanelQuery>,
) -> ApiResult<Json<JobListView>> {
    let query = checked_query(query)?;
    Ok(Json(render_page(&state, query).await?))
}

/// GET /api/jobs/stream — SSE stream re-rendering the panel while work is in
/// flight.
///
/// Emits one frame immediately, then one every poll interval. The stream
/// ends after the first frame with nothing processing; the frontend falls
/// back to on-demand fetches at that point.
async fn stream_jobs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PanelQuery>,
) -> ApiResult<Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>>> {
    let query = checked_query(query)?;

    let stream = async_stream::stream! {
        loop {
            let view = match render_page(&state, query).await {
                Ok(view) => view,
                Err(e) => {
                    tracing::warn!(error = %e, "Stopping job stream");
                    break;
                }
            };

            let done = !view.any_processing;
            let json = serde_json::to_string(&view).unwrap_or_default();
            yield Ok(Event::default().data(json));

            if done {
                break;
            }
            tokio::time::sleep(Duration::from_secs(POLL_INTERVAL_SECS)).await;
        }
    };

    Ok(Sse::new(stream))
}

/// POST /api/jobs/{job_id}/cancel — cancel a processing job.
async fn cancel_job(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<String>,
) -> ApiResult<Json<JobActionResponse>> {
    state.client()?.cancel_job(&job_id).await?;
    tracing::info!(job_id = %job_id, "Cancelled job");
    Ok(Json(JobActionResponse {
        job_id,
        action: "cancelled".to_string(),
    }))
}

/// DELETE /api/jobs/{job_id} — delete a job and all its documents.
async fn delete_job(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<String>,
) -> ApiResult<Json<JobActionResponse>> {
    state.client()?.delete_job(&job_id).await?;
    tracing::info!(job_id = %job_id, "Deleted job");
    Ok(Json(JobActionResponse {
        job_id,
        action: "deleted".to_string(),
    }))
}

/// DELETE /api/jobs/{job_id}/documents/{doc_id} — delete one document.
async fn delete_document(
    State(state): State<Arc<AppState>>,
    Path((job_id, doc_id)): Path<(String, String)>,
) -> ApiResult<Json<JobActionResponse>> {
    let reference = DocumentRef {
        job_id: job_id.clone(),
        doc_id: doc_id.clone(),
    };
    state.client()?.delete_documents(&[reference]).await?;
    tracing::info!(job_id = %job_id, doc_id = %doc_id, "Deleted document");
    Ok(Json(JobActionResponse {
        job_id,
        action: "deleted".to_string(),
    }))
}

/// Build the jobs router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/jobs", get(list_jobs))
        .route("/jobs/stream", get(stream_jobs))
        .route("/jobs/{job_id}/cancel", post(cancel_job))
        .route("/jobs/{job_id}", delete(delete_job))
        .route("/jobs/{job_id}/documents/{doc_id}", delete(delete_document))
}

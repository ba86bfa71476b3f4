//! API route handlers for the docdeck server.

pub mod config;
pub mod documents;
pub mod health;
pub mod jobs;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Create the combined API router with all routes under /api prefix.
///
/// Routes:
/// - GET    /api/health - Health check
/// - GET    /api/config - Current service connection settings (key masked)
/// - PUT    /api/config - Update connection settings
/// - POST   /api/documents - Submit documents (multipart)
/// - GET    /api/jobs - Paginated job listing, newest job first
/// - GET    /api/jobs/stream - SSE auto-refresh while documents process
/// - POST   /api/jobs/{job_id}/cancel - Cancel a processing job
/// - DELETE /api/jobs/{job_id} - Delete a job and its documents
/// - DELETE /api/jobs/{job_id}/documents/{doc_id} - Delete one document
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", health::router())
        .nest("/api", config::router())
        .nest("/api", documents::router())
        .nest("/api", jobs::router())
        .with_state(state)
}

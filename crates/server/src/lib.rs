// crates/server/src/lib.rs
//! Docdeck server library.
//!
//! This crate provides the Axum-based HTTP server behind the document
//! ingestion panel: a JSON API for configuring the remote document service,
//! submitting documents, and working with the job listing.

pub mod error;
pub mod routes;
pub mod state;
pub mod view;

pub use error::*;
pub use routes::api_routes;
pub use state::AppState;
pub use view::{build_job_list, JobListView, PanelQuery};

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the Axum application with all routes and middleware.
///
/// This sets up:
/// - API routes (health, config, documents, jobs)
/// - CORS for the panel frontend dev server (allows any origin)
/// - Request tracing
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Integration Tests
// ============================================================================

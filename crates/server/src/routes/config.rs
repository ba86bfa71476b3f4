// crates/server/src/routes/config.rs
//! Service connection settings.
//!
//! - GET /config — current settings (API key masked to a set/unset flag)
//! - PUT /config — partial update; omitted fields keep their value

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use docdeck_client::ServiceConfig;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Connection settings as the API exposes them. The key itself never leaves
/// the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../../../src/types/generated/")]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ConfigResponse {
    pub base_url: String,
    pub agent_id: String,
    pub action: String,
    pub api_url: String,
    pub vector_store_action: String,
    pub api_key_set: bool,
}

impl From<ServiceConfig> for ConfigResponse {
    fn from(config: ServiceConfig) -> Self {
        Self {
            base_url: config.base_url,
            agent_id: config.agent_id,
            action: config.action,
            api_url: config.api_url,
            vector_store_action: config.vector_store_action,
            api_key_set: !config.api_key.is_empty(),
        }
    }
}

/// Partial config update. `Some("")` clears a field; `None` leaves it alone.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigUpdate {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub agent_id: Option<String>,
    pub action: Option<String>,
    pub api_url: Option<String>,
    pub vector_store_action: Option<String>,
}

impl ConfigUpdate {
    /// Apply the update on top of the current settings.
    fn apply(self, mut config: ServiceConfig) -> ServiceConfig {
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(api_key) = self.api_key {
            config.api_key = api_key;
        }
        if let Some(agent_id) = self.agent_id {
            config.agent_id = agent_id;
        }
        if let Some(action) = self.action {
            config.action = action;
        }
        if let Some(api_url) = self.api_url {
            config.api_url = api_url;
        }
        if let Some(vector_store_action) = self.vector_store_action {
            config.vector_store_action = vector_store_action;
        }
        config
    }
}

/// GET /api/config — current connection settings.
async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(state.config_snapshot().into())
}

/// PUT /api/config — update connection settings for subsequent requests.
async fn update_config(
    State(state): State<Arc<AppState>>,
    Json(update): Json<ConfigUpdate>,
) -> ApiResult<Json<ConfigResponse>> {
    let updated = update.apply(state.config_snapshot());

    if updated.action.trim().is_empty() {
        return Err(ApiError::BadRequest("action must not be empty".to_string()));
    }

    tracing::info!(
        base_url = %updated.base_url,
        agent_id = %updated.agent_id,
        "Updated service configuration"
    );
    state.set_config(updated.clone());
    Ok(Json(updated.into()))
}

/// Build the config router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/config", get(get_config).put(update_config))
}

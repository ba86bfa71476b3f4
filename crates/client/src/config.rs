// crates/client/src/config.rs
//! Connection settings for the remote document-processing service.

use serde::{Deserialize, Serialize};

/// Default action name the service mounts its document operations under.
pub const DEFAULT_ACTION: &str = "deepdoc_client_action";

/// Settings the panel needs to reach the service, plus the two values it
/// manages on the action's behalf (`api_url`, `vector_store_action`).
///
/// All fields may start empty; `require_connection` gates the first remote
/// call rather than construction, so the panel can boot unconfigured and be
/// filled in through the config endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Root URL of the instance hosting the action endpoints.
    pub base_url: String,
    /// Bearer token for the instance. Never logged, never echoed by the API.
    pub api_key: String,
    /// Agent the submitted documents belong to.
    pub agent_id: String,
    /// Action name in the endpoint path.
    pub action: String,
    /// URL of the document-processing backend the action itself calls.
    pub api_url: String,
    /// Name of the vector-store action ingestion results are written to.
    pub vector_store_action: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            agent_id: String::new(),
            action: DEFAULT_ACTION.to_string(),
            api_url: String::new(),
            vector_store_action: String::new(),
        }
    }
}

impl ServiceConfig {
    /// Read configuration from `DOCDECK_*` environment variables. Missing
    /// variables leave the field at its default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (environment in production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: lookup("DOCDECK_BASE_URL").unwrap_or(defaults.base_url),
            api_key: lookup("DOCDECK_API_KEY").unwrap_or(defaults.api_key),
            agent_id: lookup("DOCDECK_AGENT_ID").unwrap_or(defaults.agent_id),
            action: lookup("DOCDECK_ACTION").unwrap_or(defaults.action),
            api_url: lookup("DOCDECK_API_URL").unwrap_or(defaults.api_url),
            vector_store_action: lookup("DOCDECK_VECTOR_STORE_ACTION")
                .unwrap_or(defaults.vector_store_action),
        }
    }

    /// Fields that must be set before any remote call can be made.
    pub fn require_connection(&self) -> Result<(), &'static str> {
        if self.base_url.trim().is_empty() {
            return Err("base_url is not set");
        }
        if self.agent_id.trim().is_empty() {
            return Err("agent_id is not set");
        }
        Ok(())
    }

    /// Endpoint URL for one of the action's operations.
    pub fn walker_url(&self, operation: &str) -> String {
        format!(
            "{}/action/walker/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.action,
            operation
        )
    }
}

// Manual Debug so the API key can never leak into logs.
impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_empty() {
                    "<unset>"
                } else {
                    "<redacted>"
                },
            )
            .field("agent_id", &self.agent_id)
            .field("action", &self.action)
            .field("api_url", &self.api_url)
            .field("vector_store_action", &self.vector_store_action)
            .finish()
    }
}

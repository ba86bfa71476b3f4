// crates/server/src/state.rs
//! Application state for the Axum server.

use std::sync::{Arc, RwLock};
use std::time::Instant;

use docdeck_client::{build_http_client, ClientError, DeepDocClient, ServiceConfig};

/// Shared application state accessible from all route handlers.
///
/// The config sits under a `std::sync::RwLock` (not `tokio::sync::RwLock`):
/// it is read-mostly, written only by the config endpoint, and never held
/// across an `.await` — handlers clone a snapshot up front and work from
/// that, so a mid-request config update affects the next request, not the
/// one in flight.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    /// Connection pool shared across config snapshots.
    http: reqwest::Client,
    /// Current service connection settings.
    config: RwLock<ServiceConfig>,
}

impl AppState {
    /// Create application state wrapped in an Arc for sharing.
    pub fn new(config: ServiceConfig) -> Arc<Self> {
        let http = build_http_client().expect("default TLS backend is available");
        Arc::new(Self {
            start_time: Instant::now(),
            http,
            config: RwLock::new(config),
        })
    }

    /// Clone the current config. Each request cycle works from one snapshot.
    pub fn config_snapshot(&self) -> ServiceConfig {
        match self.config.read() {
            Ok(config) => config.clone(),
            Err(poisoned) => {
                tracing::error!("config lock poisoned; using last written value");
                poisoned.into_inner().clone()
            }
        }
    }

    /// Replace the config for subsequent requests.
    pub fn set_config(&self, config: ServiceConfig) {
        match self.config.write() {
            Ok(mut guard) => *guard = config,
            Err(poisoned) => {
                tracing::error!("config lock poisoned; overwriting");
                *poisoned.into_inner() = config;
            }
        }
    }

    /// A service client over the shared pool and the current config
    /// snapshot. Fails until the connection settings are filled in.
    pub fn client(&self) -> Result<DeepDocClient, ClientError> {
        DeepDocClient::with_http(self.http.clone(), self.config_snapshot())
    }

    /// Get the server uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

// crates/server/src/main.rs
//! Docdeck server binary.
//!
//! Boots the admin API immediately; the service connection can be supplied
//! via `DOCDECK_*` environment variables or filled in later through
//! `PUT /api/config`.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use docdeck_client::ServiceConfig;
use docdeck_server::{create_app, AppState};
use tracing_subscriber::EnvFilter;

/// Default port for the server.
const DEFAULT_PORT: u16 = 47910;

#[derive(Debug, Parser)]
#[command(name = "docdeck", version, about = "Admin panel for remote document-ingestion jobs")]
struct Args {
    /// Port to listen on.
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: std::net::IpAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn,docdeck_server=info".into()),
        )
        .init();

    let args = Args::parse();

    let config = ServiceConfig::from_env();
    if let Err(missing) = config.require_connection() {
        tracing::warn!(
            missing,
            "Service connection not configured; set DOCDECK_* variables or use PUT /api/config"
        );
    }

    let state = AppState::new(config);
    let app = create_app(state);

    eprintln!("\n\u{1f4c4} docdeck v{}\n", env!("CARGO_PKG_VERSION"));

    let addr = SocketAddr::new(args.host, args.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "docdeck listening");
    eprintln!("   Ready on http://{addr}/api");

    axum::serve(listener, app).await.context("server exited")?;
    Ok(())
}

//! Web form front end
//!
//! Two routes: `GET /` shows the form and `POST /generate` renders the
//! URI with its QR code inlined as a base64 PNG. Nothing is written to disk.

mod handlers;
mod templates;

use std::sync::Arc;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use upiqr_core::constants::{DEFAULT_HOST, DEFAULT_PORT};
use upiqr_core::QrStyle;

/// Bind address for the web form
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Shared, read-only handler state
#[derive(Debug, Default)]
pub struct AppState {
    /// Style for inline QR images (black on white by default)
    pub style: QrStyle,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/generate", post(handlers::generate))
        .with_state(Arc::new(state))
}

/// Bind and serve until the process exits.
pub async fn serve(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("web form listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .await
        .context("web server stopped")?;

    Ok(())
}

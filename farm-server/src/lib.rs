//! Smart farming API stub.
//!
//! Serves a banner at `/` and a liveness probe at `/health`. Nothing here is
//! shared with the web dashboard.

pub mod config;
pub mod handlers;

pub use config::ServerConfig;

use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub started: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Seconds since this state was created.
    pub fn uptime(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// `/` and `/health` behind a permissive CORS layer.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Bind and serve until the process is stopped.
///
/// `state` should be created as early as possible so `/health` reports
/// process uptime rather than time since the bind.
pub async fn serve(config: ServerConfig, state: AppState) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Server running on http://{}", addr);
    log::info!("Health check: http://{}/health", addr);
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

use axum::extract::DefaultBodyLimit;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Receipt Tally HTTP server.
pub struct TallyServer {
    config: ServerConfig,
    state: AppState,
}

impl TallyServer {
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Server with default config and a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(ServerConfig::default(), AppState::in_memory())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
            .layer(DefaultBodyLimit::max(self.config.max_body_bytes))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("receipt service listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

//! Server Implementation
//!
//! Binds the HTTP listener and runs the axum service until Ctrl-C.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::core::{Config, Result, ServerError, ServerState};
use crate::routes::build_app;

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> Result<()> {
        if !self.config.doc_root.is_dir() {
            return Err(ServerError::MissingDocRoot(self.config.doc_root.clone()));
        }

        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config),
        };

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        tracing::info!(
            "Catalog server listening on {} (doc root: {})",
            addr,
            self.config.doc_root.display()
        );

        let app = build_app(&state).with_state(state);
        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        let serve = axum::serve(listener, app).with_graceful_shutdown(shutdown);
        serve
            .await
            .map_err(|e| ServerError::Internal(anyhow::Error::new(e).context("HTTP serve loop")))?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

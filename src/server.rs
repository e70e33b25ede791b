//! Server setup and lifecycle management

use crate::api::create_router;
use crate::api::rest::state::AppState;
use crate::config::DaemonConfig;
use crate::error::DaemonResult;
use crate::storage::InMemoryStorage;
use std::sync::Arc;
use tokio::net::TcpListener;

/// ValveChain daemon server
pub struct Server {
    config: DaemonConfig,
    storage: Arc<InMemoryStorage>,
}

impl Server {
    /// Create a new server with the given configuration. The valve
    /// collection starts from the two sample seed records.
    pub fn new(config: DaemonConfig) -> DaemonResult<Self> {
        let storage = Arc::new(InMemoryStorage::seeded());

        Ok(Self { config, storage })
    }

    /// Run the server
    pub async fn run(self) -> DaemonResult<()> {
        let addr = self.config.server.listen_addr;

        // Create app state
        let state = AppState::new(self.storage.clone(), self.config.chain.clone());

        // Create router
        let app = create_router(state);

        // Create listener
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("valvechain daemon listening on {}", addr);
        tracing::info!(
            network = self.config.chain.network(),
            connected = self.config.chain.connected(),
            "Chain configuration loaded"
        );

        // Run server with graceful shutdown
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| crate::error::DaemonError::Server(e.to_string()))?;

        tracing::info!("valvechain daemon shutting down");

        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}

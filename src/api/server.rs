//! API Server
//!
//! Server setup, middleware stack and graceful shutdown.

use super::{
    handlers::AppState,
    middleware::{create_cors_layer, request_id_middleware},
    routes::create_router,
};
use crate::config::ApiConfig;
use crate::errors::VerifierResult;
use std::sync::Arc;
use tokio::signal;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Router with the full middleware stack
pub fn create_app(config: &ApiConfig) -> axum::Router {
    let state = Arc::new(AppState::default());

    create_router(state)
        // Request ID middleware (first for tracing)
        .layer(axum::middleware::from_fn(request_id_middleware))
        // CORS layer (before timeout to handle preflight)
        .layer(create_cors_layer(config.cors_origins.clone()))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

pub struct ApiServer {
    config: ApiConfig,
}

impl ApiServer {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Serve until Ctrl+C or SIGTERM
    pub async fn run(self) -> VerifierResult<()> {
        let app = create_app(&self.config);
        let addr = self.config.bind_address();

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("Verification API listening on http://{}", listener.local_addr()?);
        self.log_server_info();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("API server stopped gracefully");
        Ok(())
    }

    fn log_server_info(&self) {
        info!("   CORS: {:?}", self.config.cors_origins);
        info!("   Request timeout: {}s", self.config.request_timeout_secs);
        info!("   GET  /health              - Health check");
        info!("   GET  /api/games           - Games and option schemas");
        info!("   POST /api/verify/hash     - Check a server seed commitment");
        info!("   POST /api/verify/outcome  - Recompute and check an outcome");
    }
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }
}

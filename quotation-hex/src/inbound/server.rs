//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use quotation_types::{QuotationRepository, RateProvider};

use super::handlers::{self, AppState};
use crate::QuotationService;

/// HTTP Server for the Quotation API.
pub struct HttpServer<R: QuotationRepository, P: RateProvider> {
    state: Arc<AppState<R, P>>,
}

impl<R: QuotationRepository, P: RateProvider> HttpServer<R, P> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: QuotationService<R, P>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/cotacao", get(handlers::cotacao::<R, P>))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}

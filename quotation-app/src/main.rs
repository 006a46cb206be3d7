//! # Quotation Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the SQLite repository
//! - Create the upstream provider and the quotation service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exchange_upstream::AwesomeApiProvider;
use quotation_hex::{QuotationService, inbound::HttpServer};
use quotation_repo::build_repo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,quotation_app=debug,quotation_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting quotation server on port {}", config.port);
    tracing::info!("Using database: {}", config.database_url);

    // Build repository (handles connection and migration)
    let repo = build_repo(&config.database_url).await?;

    // Upstream provider and the quotation service
    let provider = AwesomeApiProvider::with_base_url(&config.upstream_url);
    let service = QuotationService::new(repo, provider);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}

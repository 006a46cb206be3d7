//! Quotation CLI
//!
//! Fetches the current USD-BRL bid from the quotation server and writes it
//! to a text file. Any failure is fatal: one error line, non-zero exit.

use clap::Parser;

use quotation_client::{QuotationClient, output::write_bid_file};

#[derive(Parser)]
#[command(name = "cotacao")]
#[command(author, version, about = "USD-BRL quotation client", long_about = None)]
struct Cli {
    /// Base URL of the quotation server
    #[arg(long, env = "SERVER_URL", default_value = "http://localhost:8080")]
    server_url: String,

    /// Path of the output file
    #[arg(long, default_value = "cotacao.txt")]
    output: std::path::PathBuf,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let client = QuotationClient::new(&cli.server_url);

    let bid = match client.fetch_bid().await {
        Ok(bid) => bid,
        Err(err) => {
            tracing::error!("failed to obtain quotation: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = write_bid_file(&cli.output, &bid) {
        tracing::error!("failed to save quotation: {err}");
        std::process::exit(1);
    }

    tracing::info!(bid = %bid, "quotation saved to {}", cli.output.display());
}

//! Banner store API server.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                BANNER STORE API               │
//!                    │                                              │
//!   POST /api/       │  ┌─────────┐   ┌──────────┐   ┌───────────┐ │
//!   submit-banner ───┼─▶│  http   │──▶│  orders  │──▶│  notify   │─┼──▶ Mailjet
//!                    │  │ server  │   │ pricing  │   │  mailer   │ │
//!   POST /api/       │  └─────────┘   └──────────┘   └─────┬─────┘ │
//!   verify-          │       │                             │       │
//!   transaction ─────┼───────┤                             │       │
//!                    │       ▼                             │       │
//!                    │  ┌─────────┐                        │       │
//!                    │  │ ledger  │────────────────────────┼───────┼──▶ Solana RPC
//!                    │  │ client  │                        │       │
//!                    │  └─────────┘                        │       │
//!                    │                                              │
//!                    │  ┌────────────────────────────────────────┐  │
//!                    │  │         Cross-Cutting Concerns          │  │
//!                    │  │   config      observability (logs,      │  │
//!                    │  │   (TOML)      metrics, request IDs)     │  │
//!                    │  └────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use banner_store::config::loader::load_config;
use banner_store::config::AppConfig;
use banner_store::http::HttpServer;

#[derive(Parser, Debug)]
#[command(version, about = "Banner store API server")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, short)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "banner_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("banner-store v{} starting", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        rpc_url = %config.ledger.rpc_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            banner_store::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

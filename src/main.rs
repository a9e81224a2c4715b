//! Profile View Counter
//!
//! An in-memory view counter with an SVG badge, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request          ┌──────────────────────────────────────────┐
//!     ────────────────────────┼─▶ http (router + middleware)             │
//!                             │        │                                 │
//!                             │        ▼                                 │
//!                             │   handlers ──▶ counter::CounterService   │
//!                             │        │            │                    │
//!                             │        │            ▼                    │
//!                             │        │       ViewStore (in memory)     │
//!                             │        ▼                                 │
//!     Client Response         │   JSON / badge SVG                       │
//!     ◀───────────────────────┼──                                        │
//!                             │                                          │
//!                             │  config · observability · lifecycle      │
//!                             └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use view_counter::config::resolve_config;
use view_counter::observability::{logging, metrics};
use view_counter::{CounterService, HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "view-counter")]
#[command(about = "In-memory profile view counter with an SVG badge", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "VIEW_COUNTER_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(args.config.as_deref())?;

    logging::init_logging(&config.observability);

    tracing::info!("view-counter v{} starting", env!("CARGO_PKG_VERSION"));

    let service = Arc::new(CounterService::in_memory());

    // Bind TCP listener
    let bind_address = config.server.bind_address();
    let listener = TcpListener::bind(&bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        view_count = service.views().count,
        environment = %config.environment,
        "Profile View Counter API listening"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_termination();

    let server = HttpServer::with_service(config, service);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

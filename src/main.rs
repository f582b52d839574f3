//! circles.diy demo site.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────────┐
//!                      │                   circles-site                    │
//!                      │                                                   │
//!   Client Request     │  ┌───────────┐   ┌──────────┐   ┌─────────────┐   │
//!   ───────────────────┼─▶│ middleware│──▶│  router  │──▶│  handlers   │   │
//!                      │  │ id/trace/ │   │  (axum)  │   │ pages/form/ │   │
//!                      │  │ headers/  │   └──────────┘   │   assets    │   │
//!                      │  │ ratelimit │                  └──────┬──────┘   │
//!                      │  └───────────┘                         │          │
//!                      │                 ┌──────────────┬───────┴───────┐  │
//!                      │                 ▼              ▼               ▼  │
//!                      │          ┌────────────┐ ┌────────────┐ ┌─────────┐│
//!                      │          │  fixtures  │ │ templates  │ │feedback ││
//!                      │          │  (JSON)    │ │  (Tera)    │ │  log    ││
//!                      │          └────────────┘ └────────────┘ └─────────┘│
//!                      │                                                   │
//!                      │  background (dev): CSS watcher → CSS build        │
//!                      └───────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;

use circles_site::assets::{CssBuilder, CssWatcher};
use circles_site::config::load_config;
use circles_site::lifecycle::{self, signals, Shutdown};
use circles_site::observability::{init_logging, metrics};
use circles_site::HttpServer;

#[derive(Parser)]
#[command(name = "circles-site", version, about = "circles.diy demo site server")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long, env = "CIRCLES_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    init_logging(&config);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = if config.is_dev() { "development" } else { "production" },
        "circles-site starting"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let state = lifecycle::prepare(config.clone())?;

    let shutdown = Arc::new(Shutdown::new());

    if config.is_dev() {
        let watcher = CssWatcher::new(
            CssBuilder::from_config(&config.assets),
            Duration::from_millis(config.assets.watch_interval_ms),
        );
        tokio::spawn(watcher.run(shutdown.subscribe()));
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        request_timeout_secs = config.timeouts.request_secs,
        rate_limit = config.rate_limit.enabled,
        "Listening for connections"
    );

    signals::spawn_signal_handler(shutdown.clone());

    let server = HttpServer::new(state);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

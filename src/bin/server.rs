//! TempoKV Server Binary
//!
//! Starts the TCP server for TempoKV.

use std::sync::Arc;

use clap::Parser;
use tempokv::config::SyncStrategy;
use tempokv::network::Server;
use tempokv::{Config, Engine};
use tracing_subscriber::{fmt, EnvFilter};

/// TempoKV Server
#[derive(Parser, Debug)]
#[command(name = "tempokv-server")]
#[command(about = "Time-versioned key-value store")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./tempokv_data")]
    data_dir: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// Worker threads serving connections
    #[arg(short, long, default_value = "8")]
    workers: usize,

    /// Extension of per-key log files
    #[arg(short, long, default_value = "csv")]
    extension: String,

    /// fsync every append
    #[arg(long)]
    fsync: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tempokv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("TempoKV Server v{}", tempokv::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);

    let sync_strategy = if args.fsync {
        SyncStrategy::EveryWrite
    } else {
        SyncStrategy::OsBuffered
    };

    // Build config from args
    let config = Config::builder()
        .data_dir(&args.data_dir)
        .listen_addr(&args.listen)
        .workers(args.workers)
        .log_extension(&args.extension)
        .sync_strategy(sync_strategy)
        .build();

    // Open engine
    let engine = match Engine::open(config.clone()) {
        Ok(e) => Arc::new(e),
        Err(e) => {
            tracing::error!("Failed to open engine: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Engine initialized successfully");

    let server = match Server::bind(config, engine) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

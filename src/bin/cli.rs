//! TempoKV CLI Client
//!
//! Command-line interface for interacting with TempoKV.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use tempokv::network::Client;
use tempokv::Sequence;
use tracing_subscriber::{fmt, EnvFilter};

/// TempoKV CLI
#[derive(Parser, Debug)]
#[command(name = "tempokv-cli")]
#[command(about = "CLI for the TempoKV time-versioned key-value store")]
#[command(version)]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get the value a key held at an exact timestamp
    Get {
        /// The key to look up
        key: String,

        /// The timestamp to resolve
        timestamp: i64,
    },

    /// Append a new version of a key
    Put {
        /// The key to write
        key: String,

        /// The value to write
        value: String,

        /// Version timestamp (defaults to now, in unix seconds)
        #[arg(short, long)]
        timestamp: Option<i64>,
    },

    /// Ping the server
    Ping,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> tempokv::Result<()> {
    let mut client = Client::connect(&args.server)?;
    tracing::debug!("Connected to {}", args.server);

    match args.command {
        Commands::Get { key, timestamp } => {
            let value = client.get(&key, timestamp)?;
            println!("{}", value);
        }
        Commands::Put { key, value, timestamp } => {
            let timestamp = timestamp.unwrap_or_else(unix_now);
            client.put(&Sequence::new(key, timestamp, value))?;
            println!("saved at {}", timestamp);
        }
        Commands::Ping => {
            client.ping()?;
            println!("PONG");
        }
    }
    Ok(())
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

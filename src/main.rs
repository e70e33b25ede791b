//! ValveChain Daemon - Valve registry service with a mocked blockchain surface
//!
//! The daemon provides:
//! - REST API for valve registration, lookup, and status updates
//! - Static contract metadata and simulated contract calls
//! - A process-local log of fabricated transaction receipts

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod chain;
mod config;
mod error;
mod server;
mod storage;
mod types;

use config::DaemonConfig;
use error::DaemonResult;
use server::Server;

/// ValveChain Daemon CLI
#[derive(Parser)]
#[command(name = "valvechaind")]
#[command(about = "ValveChain Daemon - Valve registry service", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "VALVE_CONFIG")]
    config: Option<String>,

    /// Listen address
    #[arg(short, long, env = "VALVE_LISTEN_ADDR", default_value = "0.0.0.0:8000")]
    listen: String,

    /// Blockchain RPC endpoint URL
    #[arg(long, env = "RPC_URL")]
    rpc_url: Option<String>,

    /// Deployed registry contract address
    #[arg(long, env = "CONTRACT_ADDRESS")]
    contract_address: Option<String>,

    /// Signing key placeholder (held, never used)
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,

    /// Log level
    #[arg(long, env = "VALVE_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "VALVE_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> DaemonResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());

    if cli.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    // Load configuration
    let mut config = DaemonConfig::load(cli.config.as_deref())
        .map_err(|e| error::DaemonError::Config(e.to_string()))?;

    // Override with CLI args
    config.server.listen_addr = cli
        .listen
        .parse()
        .map_err(|e| error::DaemonError::Config(format!("Invalid listen address: {}", e)))?;

    if let Some(rpc_url) = cli.rpc_url {
        config.chain.rpc_url = rpc_url;
    }
    if let Some(contract_address) = cli.contract_address {
        config.chain.contract_address = contract_address;
    }
    if let Some(private_key) = cli.private_key {
        config.chain.private_key = private_key;
    }

    // Print startup banner
    println!(
        r#"
 __     __    _           ____ _           _
 \ \   / /_ _| |_   _____/ ___| |__   __ _(_)_ __
  \ \ / / _` | \ \ / / _ \ |   | '_ \ / _` | | '_ \
   \ V / (_| | |\ V /  __/ |___| | | | (_| | | | | |
    \_/ \__,_|_| \_/ \___|\____|_| |_|\__,_|_|_| |_|

  ValveChain - Valve Registry Daemon
  Version: {}
  Network: {}
  Listening: {}
"#,
        env!("CARGO_PKG_VERSION"),
        config.chain.network(),
        config.server.listen_addr
    );

    // Create and run server
    let server = Server::new(config)?;
    server.run().await
}

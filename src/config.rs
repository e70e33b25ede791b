//! Configuration for valvechain-daemon

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Main daemon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Chain (mock) configuration
    #[serde(default)]
    pub chain: ChainConfig,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            chain: ChainConfig::default(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    pub listen_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".parse().unwrap(),
        }
    }
}

/// Mocked chain connection settings, read once at startup and immutable
/// afterwards. No connection is ever opened; these values only shape the
/// static metadata the API reports back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    /// RPC endpoint URL
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Deployed registry contract address
    #[serde(default)]
    pub contract_address: String,

    /// Signing key placeholder. Held for parity with a real deployment,
    /// never read by any logic.
    #[serde(default)]
    pub private_key: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            contract_address: String::new(),
            private_key: String::new(),
        }
    }
}

impl ChainConfig {
    /// Network label derived from the RPC URL.
    pub fn network(&self) -> &'static str {
        if self.rpc_url.contains("localhost") {
            "localhost"
        } else {
            "mainnet"
        }
    }

    /// True iff both the contract address and the RPC URL are set. No
    /// actual connectivity is checked.
    pub fn connected(&self) -> bool {
        !self.contract_address.is_empty() && !self.rpc_url.is_empty()
    }

    pub fn rpc_configured(&self) -> bool {
        !self.rpc_url.is_empty()
    }

    pub fn contract_configured(&self) -> bool {
        !self.contract_address.is_empty()
    }
}

fn default_rpc_url() -> String {
    "http://localhost:8545".to_string()
}

impl DaemonConfig {
    /// Load configuration from defaults, an optional file, and
    /// `VALVE`-prefixed environment variables (e.g.
    /// `VALVE_CHAIN__RPC_URL`).
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        // Add default configuration
        builder = builder.add_source(config::Config::try_from(&DaemonConfig::default())?);

        // Add file configuration if provided
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        // Add environment variables with VALVE_ prefix
        builder = builder.add_source(
            config::Environment::with_prefix("VALVE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}

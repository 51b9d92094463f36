use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-request deadline in seconds; slower requests are answered with 408
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How long shutdown waits for in-flight requests, in seconds
    #[serde(default = "default_shutdown_grace_secs")]
    pub shutdown_grace_secs: u64,

    /// Maximum request body size in KB
    #[serde(default = "default_max_body_size_kb")]
    pub max_body_size_kb: usize,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Start with the two demo contacts
    #[serde(default = "default_true")]
    pub seed_contacts: bool,
}

/// Command-line flags. Anything passed here wins over file and environment.
#[derive(Debug, Default, Parser)]
#[command(name = "phonebook-server", version, about = "In-memory phonebook HTTP API")]
pub struct Cli {
    /// Port number to expose the API [default: 9000]
    #[arg(long)]
    pub port: Option<u16>,

    /// Per-request deadline in seconds, answered with 408 when exceeded [default: 2]
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            shutdown_grace_secs: default_shutdown_grace_secs(),
            max_body_size_kb: default_max_body_size_kb(),
            log_level: default_log_level(),
            seed_contacts: default_true(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config files
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("phonebook").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("PHONEBOOK").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Apply command-line overrides
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(timeout) = cli.timeout {
            self.timeout_secs = timeout;
        }
        self
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_kb * 1024
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9000
}

fn default_timeout_secs() -> u64 {
    2
}

fn default_shutdown_grace_secs() -> u64 {
    30
}

fn default_max_body_size_kb() -> usize {
    1024
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

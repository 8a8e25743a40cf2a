//! Gateway configuration.

use std::time::Duration;

use clap::Parser;

/// Pet clinic gateway command line arguments.
#[derive(Debug, Parser)]
#[command(name = "petclinic-gateway")]
#[command(about = "HTTP/JSON API for pet clinic owners and pets")]
#[command(version)]
pub struct Args {
    /// Address to listen on for HTTP requests.
    #[arg(short, long, default_value = "0.0.0.0:8081")]
    pub listen: String,

    /// Start with only the pet types, no sample owners or pets.
    #[arg(long, default_value_t = false)]
    pub no_seed: bool,

    /// Per-request timeout (ms) enforced at the gateway.
    #[arg(long, default_value_t = 30_000)]
    pub request_timeout_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address to listen on for HTTP requests.
    pub listen_addr: String,
    /// Whether to load sample owners and pets at startup.
    pub seed_data: bool,
    /// Per-request timeout enforced at the gateway.
    pub request_timeout: Duration,
}

impl From<&Args> for GatewayConfig {
    fn from(args: &Args) -> Self {
        Self {
            listen_addr: args.listen.clone(),
            seed_data: !args.no_seed,
            request_timeout: Duration::from_millis(args.request_timeout_ms),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8081".to_string(),
            seed_data: true,
            request_timeout: Duration::from_secs(30),
        }
    }
}

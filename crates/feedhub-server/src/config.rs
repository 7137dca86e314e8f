//! Server configuration from command-line flags and environment

use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Clone, Parser)]
#[command(name = "feedhub-server")]
#[command(version, about = "Feedhub - users, posts, profiles and member types over HTTP", long_about = None)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
    pub bind_address: SocketAddr,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Start without the default member types
    #[arg(long, env = "NO_SEED")]
    pub no_seed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "feedhub-server",
            "--bind-address",
            "127.0.0.1:8080",
            "--log-level",
            "debug",
            "--no-seed",
        ])
        .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.log_level, "debug");
        assert!(config.no_seed);
    }

    #[test]
    fn test_invalid_bind_address() {
        let res = ServerConfig::try_parse_from(["feedhub-server", "--bind-address", "nowhere"]);
        assert!(res.is_err());
    }
}

//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── server: ServerConfig  # Host, port, CORS, shutdown
//! └── auth: AuthConfig      # JWT secret and token lifetime
//! ```
//!
//! Every option can be provided as a CLI argument or a `SHOPFRONT_*`
//! environment variable; use `--help` to see them all.

mod server;
mod service;

use std::process;

use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use self::server::ServerConfig;
pub use self::service::AuthConfig;
use crate::TRACING_TARGET_STARTUP;

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "shopfront")]
#[command(about = "Shopfront e-commerce admin API server")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// Authentication configuration.
    #[clap(flatten)]
    pub auth: AuthConfig,
}

impl Cli {
    /// Parses CLI arguments and environment variables.
    pub fn init() -> Self {
        Self::parse()
    }

    /// Initializes tracing with environment-based filtering.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server
            .validate()
            .context("invalid server configuration")?;
        self.auth
            .to_service_config()
            .validate()
            .context("invalid authentication configuration")?;
        Ok(())
    }

    /// Logs configuration at startup (no sensitive information).
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            "build information"
        );

        self.server.log();
        self.auth.log();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cli = Cli::parse_from(["shopfront"]);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn rejects_empty_jwt_secret() {
        let cli = Cli::parse_from(["shopfront", "--jwt-secret", "  "]);
        assert!(cli.validate().is_err());
    }
}

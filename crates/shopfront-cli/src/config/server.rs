//! HTTP server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use anyhow::{Result as AnyhowResult, anyhow};
use axum::http::HeaderValue;
use clap::Args;
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::TRACING_TARGET_STARTUP;

/// HTTP server configuration.
///
/// # Environment Variables
///
/// - `SHOPFRONT_HOST` - bind address (default: 127.0.0.1)
/// - `SHOPFRONT_PORT` - TCP port (default: 3000, valid range: 1024-65535)
/// - `SHOPFRONT_SHUTDOWN_TIMEOUT` - graceful shutdown timeout in seconds
/// - `SHOPFRONT_CORS_ALLOWED_ORIGINS` - comma-separated list of origins;
///   empty permits any origin (development mode)
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct ServerConfig {
    /// Host address to bind the server to.
    ///
    /// Use "127.0.0.1" for localhost only, "0.0.0.0" for all interfaces.
    #[arg(long, env = "SHOPFRONT_HOST", default_value = "127.0.0.1")]
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// TCP port number for the server to listen on.
    ///
    /// Must be in the range 1024-65535; lower ports require root privileges.
    #[arg(short = 'p', long, env = "SHOPFRONT_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Maximum time in seconds to wait for graceful shutdown.
    #[arg(long, env = "SHOPFRONT_SHUTDOWN_TIMEOUT", default_value_t = 30)]
    pub shutdown_timeout: u64,

    /// List of allowed CORS origins.
    ///
    /// Empty permits any origin, which is intended for development only.
    #[arg(long, env = "SHOPFRONT_CORS_ALLOWED_ORIGINS", value_delimiter = ',')]
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

/// Default host address for development.
fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

impl ServerConfig {
    /// Validates all configuration values and returns errors for invalid settings.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is outside its valid range:
    /// - Port must be 1024-65535
    /// - Shutdown timeout must be 1-300 seconds
    /// - CORS origins must be valid header values
    pub fn validate(&self) -> AnyhowResult<()> {
        if self.port < 1024 {
            return Err(anyhow!(
                "Port {} is below 1024. Use ports 1024-65535 to avoid requiring root privileges.",
                self.port
            ));
        }

        if self.shutdown_timeout == 0 || self.shutdown_timeout > 300 {
            return Err(anyhow!(
                "Shutdown timeout {} seconds is invalid. Must be between 1 and 300 seconds.",
                self.shutdown_timeout
            ));
        }

        for origin in &self.cors_allowed_origins {
            if HeaderValue::from_str(origin).is_err() {
                return Err(anyhow!("CORS origin {origin:?} is not a valid header value"));
            }
        }

        Ok(())
    }

    /// Returns the complete socket address for server binding.
    #[must_use]
    pub const fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns the graceful shutdown timeout as a `Duration`.
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout)
    }

    /// Returns whether the server is configured to bind to all interfaces.
    #[must_use]
    pub const fn binds_to_all_interfaces(&self) -> bool {
        match self.host {
            IpAddr::V4(addr) => addr.is_unspecified(),
            IpAddr::V6(addr) => addr.is_unspecified(),
        }
    }

    /// Builds the CORS layer from the configured origins.
    ///
    /// `validate` must have accepted the origins first.
    pub fn cors_layer(&self) -> CorsLayer {
        let layer = CorsLayer::new()
            .allow_methods(Any)
            .allow_headers(Any);

        if self.cors_allowed_origins.is_empty() {
            return layer.allow_origin(Any);
        }

        let origins: Vec<HeaderValue> = self
            .cors_allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }

    /// Logs the network configuration at startup.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_STARTUP,
            host = %self.host,
            port = self.port,
            shutdown_timeout_secs = self.shutdown_timeout,
            cors_origins = ?self.cors_allowed_origins,
            "server configuration loaded"
        );

        if self.binds_to_all_interfaces() {
            tracing::warn!(
                target: TRACING_TARGET_STARTUP,
                "server is bound to all interfaces; check firewall rules"
            );
        }
    }
}

impl Default for ServerConfig {
    /// Development-friendly defaults.
    fn default() -> Self {
        Self {
            host: default_host(),
            port: 3000,
            shutdown_timeout: 30,
            cors_allowed_origins: Vec::new(),
        }
    }
}

//! HTTP server startup with lifecycle management.

/// Tracing target for server startup events.
pub const TRACING_TARGET_STARTUP: &str = "shopfront_cli::server::startup";

/// Tracing target for server shutdown events.
pub const TRACING_TARGET_SHUTDOWN: &str = "shopfront_cli::server::shutdown";

mod error;
mod shutdown;

use axum::Router;
use tokio::net::TcpListener;

pub use self::error::{ServerError, ServerResult};
use self::shutdown::shutdown_signal;
use crate::config::ServerConfig;

/// Starts the HTTP server with graceful shutdown.
///
/// Binds to the configured address and serves requests until a shutdown
/// signal (SIGTERM or Ctrl+C) arrives.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - The address cannot be bound
/// - The server encounters a fatal error during operation
pub async fn serve(app: Router, config: ServerConfig) -> ServerResult<()> {
    if let Err(validation_error) = config.validate() {
        let error = ServerError::invalid_config(&validation_error);
        report_failure(&error, "invalid server configuration");
        return Err(error);
    }

    let server_addr = config.server_addr();
    let listener = match TcpListener::bind(server_addr).await {
        Ok(listener) => listener,
        Err(bind_error) => {
            let error = ServerError::bind_error(&server_addr.to_string(), bind_error);
            report_failure(&error, "failed to bind to address");
            return Err(error);
        }
    };

    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        addr = %server_addr,
        "server is ready and listening for connections"
    );

    let shutdown_signal = shutdown_signal(config.shutdown_timeout());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|error| {
            let error = ServerError::Runtime(error);
            report_failure(&error, "server encountered an error");
            error
        })?;

    tracing::info!(target: TRACING_TARGET_SHUTDOWN, "server shut down gracefully");
    Ok(())
}

/// Logs a server failure with its recoverability and, when one exists, a
/// recovery suggestion.
fn report_failure(error: &ServerError, message: &'static str) {
    tracing::error!(
        target: TRACING_TARGET_STARTUP,
        error = %error,
        recoverable = error.is_recoverable(),
        "{message}"
    );

    if let Some(suggestion) = error.suggestion() {
        tracing::warn!(target: TRACING_TARGET_STARTUP, suggestion, "recovery suggestion");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_config_is_rejected_before_binding() {
        let config = ServerConfig {
            port: 80,
            ..Default::default()
        };

        let error = serve(Router::new(), config).await.unwrap_err();
        assert!(matches!(error, ServerError::InvalidConfig(_)));
        assert!(!error.is_recoverable());
        assert!(error.suggestion().is_some());
    }
}

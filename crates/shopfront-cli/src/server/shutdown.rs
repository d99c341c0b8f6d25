//! Signal listeners that end the serve loop.

use std::time::Duration;

use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix;

use super::TRACING_TARGET_SHUTDOWN;

/// Resolves once the process is asked to stop, via SIGTERM or Ctrl+C.
///
/// Passed to `with_graceful_shutdown`; in-flight requests get up to
/// `shutdown_timeout` to drain after it resolves.
pub async fn shutdown_signal(shutdown_timeout: Duration) {
    tokio::select! {
        () = interrupt() => {},
        () = terminate() => {},
    }

    tracing::info!(
        target: TRACING_TARGET_SHUTDOWN,
        timeout_secs = shutdown_timeout.as_secs(),
        "graceful shutdown initiated"
    );
}

/// Waits for Ctrl+C. Also resolves when the handler cannot be installed,
/// which turns a broken signal hook into an immediate shutdown.
async fn interrupt() {
    match ctrl_c().await {
        Ok(()) => {
            tracing::info!(
                target: TRACING_TARGET_SHUTDOWN,
                "received Ctrl+C, draining connections"
            );
        }
        Err(error) => {
            tracing::error!(
                target: TRACING_TARGET_SHUTDOWN,
                error = %error,
                "Ctrl+C handler could not be installed"
            );
        }
    }
}

/// Waits for SIGTERM, the stop signal sent by service managers.
#[cfg(unix)]
async fn terminate() {
    match unix::signal(unix::SignalKind::terminate()) {
        Ok(mut signal) => {
            signal.recv().await;
            tracing::info!(
                target: TRACING_TARGET_SHUTDOWN,
                "received SIGTERM, draining connections"
            );
        }
        Err(error) => {
            tracing::error!(
                target: TRACING_TARGET_SHUTDOWN,
                error = %error,
                "SIGTERM handler could not be installed"
            );
        }
    }
}

/// SIGTERM does not exist off Unix; only Ctrl+C can stop the server there.
#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}

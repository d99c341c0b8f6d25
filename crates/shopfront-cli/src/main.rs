#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use shopfront_server::handler::routes;
use shopfront_server::service::ServiceState;
use tower_http::trace::TraceLayer;

use crate::config::Cli;

/// Tracing target for application startup events.
pub const TRACING_TARGET_STARTUP: &str = "shopfront_cli::startup";

/// Tracing target for application shutdown events.
pub const TRACING_TARGET_SHUTDOWN: &str = "shopfront_cli::shutdown";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        "starting shopfront server"
    );

    cli.validate().context("invalid configuration")?;
    cli.log();

    let service_config = cli.auth.to_service_config();
    let state =
        ServiceState::from_config(&service_config).context("failed to create service state")?;
    let router = create_router(state, &cli);

    server::serve(router, cli.server).await?;

    Ok(())
}

/// Creates the router with middleware layers applied.
///
/// The trace layer wraps CORS so preflight requests show up in the logs.
fn create_router(state: ServiceState, cli: &Cli) -> Router {
    routes(state.clone())
        .with_state(state)
        .layer(cli.server.cors_layer())
        .layer(TraceLayer::new_for_http())
}

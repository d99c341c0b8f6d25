//! Health monitoring handlers.

use axum::Router;
use axum::routing::get;
use serde::{Deserialize, Serialize};

use crate::extract::Json;
use crate::handler::Result;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "shopfront_server::handler::monitors";

/// Response returned by the liveness probe.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    pub success: bool,
    pub status: String,
}

/// Reports that the server is up and serving requests.
///
/// The store is in-memory, so there are no downstream dependencies to probe;
/// reaching this handler is the health check.
#[tracing::instrument(skip_all)]
async fn health_status() -> Result<Json<HealthResponse>> {
    tracing::debug!(target: TRACING_TARGET, "health status requested");

    Ok(Json(HealthResponse {
        success: true,
        status: "ok".to_owned(),
    }))
}

/// Returns a [`Router`] with all health monitoring routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/health", get(health_status))
}

//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! Routes are mounted under `/api`. The authentication guard wraps the
//! private group as a whole; public routes (health, login, register) bypass
//! it.
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod admins;
mod authentication;
mod error;
mod monitors;
mod orders;
mod products;
mod response;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
pub(crate) use crate::handler::response::{PageInfo, QueryEcho};
use crate::middleware::require_authentication;
use crate::service::ServiceState;

#[inline]
async fn handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns a [`Router`] with all routes behind the authentication guard.
///
/// [`Router`]: axum::routing::Router
fn private_routes() -> Router<ServiceState> {
    Router::new()
        .merge(authentication::private_routes())
        .merge(admins::routes())
        .merge(products::routes())
        .merge(orders::routes())
}

/// Returns a [`Router`] with all public routes.
///
/// [`Router`]: axum::routing::Router
fn public_routes() -> Router<ServiceState> {
    Router::new()
        .merge(authentication::public_routes())
        .merge(monitors::routes())
}

/// Returns a [`Router`] with all routes mounted under `/api`.
///
/// [`Router`]: axum::routing::Router
pub fn routes(state: ServiceState) -> Router<ServiceState> {
    let require_authentication = from_fn_with_state(state, require_authentication);

    let api_router = Router::new()
        .merge(private_routes().route_layer(require_authentication))
        .merge(public_routes());

    Router::new().nest("/api", api_router).fallback(handler)
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::handler::routes;
    use crate::service::{ServiceConfig, ServiceState};

    /// Returns a new [`TestServer`] backed by a fresh, empty state.
    pub fn create_test_server() -> anyhow::Result<TestServer> {
        let (server, _) = create_test_server_with_state()?;
        Ok(server)
    }

    /// Returns a new [`TestServer`] along with its state, for tests that seed
    /// the store directly.
    pub fn create_test_server_with_state() -> anyhow::Result<(TestServer, ServiceState)> {
        let config = ServiceConfig::default();
        let state = ServiceState::from_config(&config)?;
        let app = routes(state.clone()).with_state(state.clone());
        let server = TestServer::new(app)?;
        Ok((server, state))
    }

    /// Registers a fresh admin account and returns its bearer token.
    pub async fn authenticate(server: &TestServer) -> anyhow::Result<String> {
        let response = server
            .post("/api/auth/register")
            .json(&json!({
                "username": "test-admin",
                "email": "test-admin@example.com",
                "password": "correct horse battery staple",
                "phoneNumber": "+60123456789",
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body = response.json::<Value>();
        let token = body["token"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("registration response carries no token"))?;
        Ok(token.to_owned())
    }

    #[tokio::test]
    async fn handlers() -> anyhow::Result<()> {
        let server = create_test_server()?;
        assert!(server.is_running());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() -> anyhow::Result<()> {
        let server = create_test_server()?;
        let response = server.get("/api/definitely-not-a-route").await;
        response.assert_status(StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn private_routes_require_a_token() -> anyhow::Result<()> {
        let server = create_test_server()?;

        for path in ["/api/admins", "/api/products", "/api/orders", "/api/auth/me"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::UNAUTHORIZED);
        }

        Ok(())
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() -> anyhow::Result<()> {
        let server = create_test_server()?;
        let response = server
            .get("/api/products")
            .authorization_bearer("not.a.token")
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        Ok(())
    }
}

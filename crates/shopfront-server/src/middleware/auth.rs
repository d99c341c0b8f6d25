//! Authentication guard middleware.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::extract::AuthState;

/// Rejects requests that do not carry a valid bearer token.
///
/// Token extraction and verification happen in [`AuthState`]; this middleware
/// only exists to gate whole route groups instead of individual handlers.
/// Handlers that need the claims extract [`AuthState`] themselves.
pub async fn require_authentication(_: AuthState, request: Request, next: Next) -> Response {
    next.run(request).await
}

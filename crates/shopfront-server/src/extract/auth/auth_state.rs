//! Authenticated request state.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use derive_more::{Deref, DerefMut, From};

use crate::extract::AuthClaims;
use crate::handler::{Error, ErrorKind};
use crate::service::AuthKeys;

/// Verified claims of the admin making the request.
///
/// Extracting this type enforces authentication: a missing `Authorization`
/// header or a token that fails verification rejects the request before the
/// handler runs.
#[must_use]
#[derive(Debug, Clone, Deref, DerefMut, From)]
pub struct AuthState(pub AuthClaims);

impl AuthState {
    /// Returns the identifier of the authenticated admin.
    #[inline]
    pub fn admin_id(&self) -> &str {
        &self.0.sub
    }

    /// Consumes the wrapper and returns the verified claims.
    #[inline]
    pub fn into_claims(self) -> AuthClaims {
        self.0
    }
}

impl<S> FromRequestParts<S> for AuthState
where
    AuthKeys: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ErrorKind::MissingAuthToken.into_error())?;

        let keys = AuthKeys::from_ref(state);
        let claims = AuthClaims::decode(bearer.token(), &keys)?;
        Ok(AuthState(claims))
    }
}

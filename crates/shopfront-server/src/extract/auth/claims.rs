//! Access token claims.

use jiff::{Span, Timestamp};
use jsonwebtoken::{Algorithm, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::handler::{ErrorKind, Result};
use crate::service::AuthKeys;

/// `iss` claim stamped into every issued token.
pub const TOKEN_ISSUER: &str = "shopfront";
/// `aud` claim stamped into every issued token.
pub const TOKEN_AUDIENCE: &str = "shopfront:admin";

const TRACING_TARGET: &str = "shopfront_server::extract::auth";

/// Claims carried by an admin access token.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthClaims {
    /// Token issuer, always [`TOKEN_ISSUER`].
    pub iss: String,
    /// Token audience, always [`TOKEN_AUDIENCE`].
    pub aud: String,
    /// Identifier of the authenticated admin.
    pub sub: String,
    /// Email address at the time of issuance.
    pub email: String,
    /// Role at the time of issuance.
    pub role: String,
    /// Issuance time, seconds since the Unix epoch.
    #[serde(with = "jiff::fmt::serde::timestamp::second::required")]
    pub iat: Timestamp,
    /// Expiration time, seconds since the Unix epoch.
    #[serde(with = "jiff::fmt::serde::timestamp::second::required")]
    pub exp: Timestamp,
}

impl AuthClaims {
    /// Creates claims for a freshly authenticated admin.
    pub fn new(admin_id: &str, email: &str, role: &str, keys: &AuthKeys) -> Result<Self> {
        let issued_at = Timestamp::now();
        let expires_at = issued_at
            .checked_add(Span::new().hours(keys.token_expiry_hours()))
            .map_err(|error| {
                tracing::error!(target: TRACING_TARGET, error = %error, "token lifetime overflow");
                ErrorKind::InternalServerError.into_error()
            })?;

        Ok(Self {
            iss: TOKEN_ISSUER.to_owned(),
            aud: TOKEN_AUDIENCE.to_owned(),
            sub: admin_id.to_owned(),
            email: email.to_owned(),
            role: role.to_owned(),
            iat: issued_at,
            exp: expires_at,
        })
    }

    /// Signs the claims into a compact token.
    pub fn encode(&self, keys: &AuthKeys) -> Result<String> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), self, keys.encoding()).map_err(
            |error| {
                tracing::error!(target: TRACING_TARGET, error = %error, "token signing failed");
                ErrorKind::InternalServerError.into_error()
            },
        )
    }

    /// Verifies a compact token and returns its claims.
    ///
    /// Signature, issuer, audience, and expiration are all checked; any
    /// failure maps to a malformed-token error without leaking the cause.
    pub fn decode(token: &str, keys: &AuthKeys) -> Result<Self> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_audience(&[TOKEN_AUDIENCE]);

        jsonwebtoken::decode::<Self>(token, keys.decoding(), &validation)
            .map(|data| data.claims)
            .map_err(|error| {
                tracing::debug!(target: TRACING_TARGET, error = %error, "token verification failed");
                ErrorKind::MalformedAuthToken.into_error()
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::service::{AuthKeys, ServiceConfig};

    use super::*;

    fn test_keys() -> AuthKeys {
        AuthKeys::from_config(&ServiceConfig::default())
    }

    #[test]
    fn encode_decode_roundtrip() -> anyhow::Result<()> {
        let keys = test_keys();
        let claims = AuthClaims::new("ADMIN-test", "admin@example.com", "Current Admin", &keys)?;

        let token = claims.encode(&keys)?;
        let decoded = AuthClaims::decode(&token, &keys)?;
        assert_eq!(decoded.sub, "ADMIN-test");
        assert_eq!(decoded.email, "admin@example.com");
        assert_eq!(decoded.iss, TOKEN_ISSUER);
        assert_eq!(decoded.aud, TOKEN_AUDIENCE);
        Ok(())
    }

    #[test]
    fn rejects_garbage_token() {
        let keys = test_keys();
        let result = AuthClaims::decode("definitely.not.a-token", &keys);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_token_signed_with_other_secret() -> anyhow::Result<()> {
        let keys = test_keys();
        let other = AuthKeys::from_config(&ServiceConfig {
            jwt_secret: "another-secret".to_owned(),
            ..ServiceConfig::default()
        });

        let claims = AuthClaims::new("ADMIN-test", "admin@example.com", "Current Admin", &other)?;
        let token = claims.encode(&other)?;
        assert!(AuthClaims::decode(&token, &keys).is_err());
        Ok(())
    }
}

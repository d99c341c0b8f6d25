//! Secure password hashing and verification using Argon2id.
//!
//! `hash_password` and `verify_password` return handler-compatible errors:
//! system failures map to `InternalServerError`, failed verification maps to
//! `Unauthorized`, so handlers can use `?` directly.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHasher as _, PasswordVerifier as _, Version};

use crate::handler::{ErrorKind, Result};
use crate::service::{Error as ServiceError, Result as ServiceResult};

/// Tracing target for password hashing operations.
const TRACING_TARGET: &str = "shopfront_server::service::auth::hasher";

/// Password hashing and verification service using Argon2id.
///
/// Uses OWASP recommended parameters (19 MB memory, 2 iterations, 1 thread)
/// with a cryptographically secure random salt per hash.
#[derive(Debug, Clone)]
pub struct AuthHasher {
    argon2: Argon2<'static>,
}

impl AuthHasher {
    /// Creates a new password hashing service.
    ///
    /// # Errors
    ///
    /// Returns a service error if Argon2 parameter construction fails.
    pub fn new() -> ServiceResult<Self> {
        let params = Params::new(
            19456, // 19 MB - OWASP recommended
            2,     // 2 iterations - OWASP recommended
            1,     // 1 thread - OWASP recommended
            None,  // Use default output length (32 bytes)
        )
        .map_err(|error| {
            tracing::error!(
                target: TRACING_TARGET,
                error = %error,
                "failed to create Argon2 parameters"
            );

            ServiceError::config("Invalid password hashing configuration")
        })?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        Ok(Self { argon2 })
    }

    /// Hashes a password with a fresh random salt.
    ///
    /// The returned PHC string embeds all parameters and the salt, suitable
    /// for long-term storage.
    pub fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|error| {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    "password hashing failed"
                );

                ErrorKind::InternalServerError.into_error()
            })
    }

    /// Verifies a password against a stored PHC hash string.
    ///
    /// Verification failures are indistinguishable from unknown accounts at
    /// the HTTP layer; both surface as `Unauthorized`.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<()> {
        let parsed_hash = PasswordHash::new(stored_hash).map_err(|error| {
            tracing::error!(
                target: TRACING_TARGET,
                error = %error,
                "stored password hash is malformed"
            );

            ErrorKind::InternalServerError.into_error()
        })?;

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| {
                ErrorKind::Unauthorized
                    .with_message("Invalid credentials")
                    .into_static()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() -> anyhow::Result<()> {
        let hasher = AuthHasher::new()?;
        let hash = hasher.hash_password("correct horse battery staple")?;

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify_password("correct horse battery staple", &hash).is_ok());
        assert!(hasher.verify_password("wrong password", &hash).is_err());
        Ok(())
    }

    #[test]
    fn hashes_are_salted() -> anyhow::Result<()> {
        let hasher = AuthHasher::new()?;
        let first = hasher.hash_password("secret")?;
        let second = hasher.hash_password("secret")?;
        assert_ne!(first, second);
        Ok(())
    }

    #[test]
    fn malformed_stored_hash_is_internal_error() -> anyhow::Result<()> {
        let hasher = AuthHasher::new()?;
        let error = hasher.verify_password("secret", "not-a-phc-string").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
        Ok(())
    }
}

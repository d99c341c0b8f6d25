//! Session token signing keys.

use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::service::ServiceConfig;

/// HS256 key pair used to sign and verify session tokens.
///
/// Both keys derive from the configured HMAC secret; the split mirrors
/// asymmetric setups so the rest of the code never touches the raw secret.
#[derive(Clone)]
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    token_expiry_hours: i64,
}

impl AuthKeys {
    /// Creates keys from the service configuration.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_expiry_hours: config.token_expiry_hours,
        }
    }

    /// Returns the encoding (signing) key.
    #[inline]
    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    /// Returns the decoding (verification) key.
    #[inline]
    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }

    /// Returns the configured token lifetime in hours.
    #[inline]
    pub const fn token_expiry_hours(&self) -> i64 {
        self.token_expiry_hours
    }
}

impl std::fmt::Debug for AuthKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material stays out of logs.
        f.debug_struct("AuthKeys")
            .field("token_expiry_hours", &self.token_expiry_hours)
            .finish_non_exhaustive()
    }
}

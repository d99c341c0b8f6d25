//! Authentication configuration.

use clap::Args;
use serde::{Deserialize, Serialize};
use shopfront_server::service::ServiceConfig;

use crate::TRACING_TARGET_STARTUP;

/// Authentication configuration.
///
/// # Environment Variables
///
/// - `SHOPFRONT_JWT_SECRET` - HMAC secret for signing session tokens; the
///   default is for development only
/// - `SHOPFRONT_TOKEN_EXPIRY_HOURS` - session token lifetime (default: 24)
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify session tokens.
    #[arg(long, env = "SHOPFRONT_JWT_SECRET", default_value = "shopfront-dev-secret")]
    #[serde(skip_serializing)]
    pub jwt_secret: String,

    /// Session token lifetime in hours.
    #[arg(long, env = "SHOPFRONT_TOKEN_EXPIRY_HOURS", default_value_t = 24)]
    pub token_expiry_hours: i64,
}

impl AuthConfig {
    /// Converts into the service-layer configuration.
    pub fn to_service_config(&self) -> ServiceConfig {
        ServiceConfig {
            jwt_secret: self.jwt_secret.clone(),
            token_expiry_hours: self.token_expiry_hours,
        }
    }

    /// Logs the authentication configuration, keeping the secret out.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_STARTUP,
            token_expiry_hours = self.token_expiry_hours,
            default_secret = self.jwt_secret == "shopfront-dev-secret",
            "authentication configuration loaded"
        );

        if self.jwt_secret == "shopfront-dev-secret" {
            tracing::warn!(
                target: TRACING_TARGET_STARTUP,
                "using the development JWT secret; set SHOPFRONT_JWT_SECRET in production"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_service_config() {
        let auth = AuthConfig {
            jwt_secret: "secret".to_owned(),
            token_expiry_hours: 12,
        };

        let config = auth.to_service_config();
        assert_eq!(config.jwt_secret, "secret");
        assert_eq!(config.token_expiry_hours, 12);
        assert!(config.validate().is_ok());
    }
}

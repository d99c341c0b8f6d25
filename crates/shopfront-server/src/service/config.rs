//! App [`state`] configuration.
//!
//! [`state`]: crate::service::ServiceState

use anyhow::{Result as AnyhowResult, anyhow};
use serde::{Deserialize, Serialize};

/// Default session lifetime in hours.
const DEFAULT_TOKEN_EXPIRY_HOURS: i64 = 24;

/// App [`state`] configuration.
///
/// [`state`]: crate::service::ServiceState
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// HMAC secret used to sign and verify session tokens.
    pub jwt_secret: String,

    /// Session token lifetime in hours.
    pub token_expiry_hours: i64,
}

impl ServiceConfig {
    /// Validates all configuration values and returns errors for invalid settings.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid:
    /// - JWT secret must not be empty
    /// - Token expiry must be between 1 hour and 30 days
    pub fn validate(&self) -> AnyhowResult<()> {
        if self.jwt_secret.trim().is_empty() {
            return Err(anyhow!("JWT secret cannot be empty"));
        }

        if !(1..=720).contains(&self.token_expiry_hours) {
            return Err(anyhow!(
                "Token expiry must be between 1 and 720 hours, got {}",
                self.token_expiry_hours
            ));
        }

        Ok(())
    }
}

impl Default for ServiceConfig {
    /// Development defaults; production deployments must override the secret.
    fn default() -> Self {
        Self {
            jwt_secret: "shopfront-dev-secret".to_owned(),
            token_expiry_hours: DEFAULT_TOKEN_EXPIRY_HOURS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ServiceConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_secret_is_rejected() {
        let config = ServiceConfig {
            jwt_secret: "  ".to_owned(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn expiry_bounds() {
        let config = ServiceConfig {
            token_expiry_hours: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ServiceConfig {
            token_expiry_hours: 1000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

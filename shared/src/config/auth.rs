//! Authentication and token signing configuration

use serde::{Deserialize, Serialize};

/// Placeholder secret shipped with development builds. Token issuance must
/// refuse to start with this value in place.
pub const DEFAULT_DEV_SECRET: &str = "development-secret-please-change-in-production";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token expiry time in minutes
    pub token_expiry_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_DEV_SECRET),
            token_expiry_minutes: 60,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token expiry in minutes
    pub fn with_expiry_minutes(mut self, minutes: i64) -> Self {
        self.token_expiry_minutes = minutes;
        self
    }

    /// Check if using the default development secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_DEV_SECRET
    }

    /// Load configuration from environment variables
    ///
    /// Reads `JWT_SECRET` and `JWT_EXPIRY_MINUTES`, falling back to defaults
    /// when unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            config.secret = secret;
        }
        if let Ok(minutes) = std::env::var("JWT_EXPIRY_MINUTES") {
            if let Ok(minutes) = minutes.parse() {
                config.token_expiry_minutes = minutes;
            }
        }
        config
    }
}

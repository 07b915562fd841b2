//! Verification challenge configuration

use serde::{Deserialize, Serialize};

/// Default lifetime of a verification code (30 minutes)
pub const DEFAULT_CHALLENGE_WINDOW_MINUTES: i64 = 30;

/// Configuration for the verification challenge flow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChallengeConfig {
    /// Number of minutes before a verification code expires
    pub expiration_minutes: i64,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            expiration_minutes: DEFAULT_CHALLENGE_WINDOW_MINUTES,
        }
    }
}

impl ChallengeConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `CHALLENGE_WINDOW_MINUTES`, falling back to the 30 minute default.
    pub fn from_env() -> Self {
        let expiration_minutes = std::env::var("CHALLENGE_WINDOW_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CHALLENGE_WINDOW_MINUTES);
        Self { expiration_minutes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window() {
        assert_eq!(ChallengeConfig::default().expiration_minutes, 30);
    }
}

//! Response value objects for login and the verification challenge flow.

use serde::{Deserialize, Serialize};

/// Message returned when a challenge has been issued
pub const CHALLENGE_SENT_MESSAGE: &str =
    "Verification code is sent to your registered phone number!";

/// Message returned when the challenge was completed
pub const VERIFIED_MESSAGE: &str = "User verified!";

/// Login response containing the bearer token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Signed bearer token for authenticated requests
    pub token: String,

    /// Token expiration time in seconds
    pub expires_in: i64,
}

impl LoginResponse {
    /// Creates a new login response
    pub fn new(token: String, expires_in: i64) -> Self {
        Self { token, expires_in }
    }
}

/// Result of issuing a verification challenge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChallengeIssued {
    /// User-facing confirmation message
    pub message: String,
}

impl ChallengeIssued {
    pub fn new() -> Self {
        Self {
            message: CHALLENGE_SENT_MESSAGE.to_string(),
        }
    }
}

impl Default for ChallengeIssued {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of completing a verification challenge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChallengeVerified {
    /// User-facing confirmation message
    pub message: String,
}

impl ChallengeVerified {
    pub fn new() -> Self {
        Self {
            message: VERIFIED_MESSAGE.to_string(),
        }
    }
}

impl Default for ChallengeVerified {
    fn default() -> Self {
        Self::new()
    }
}

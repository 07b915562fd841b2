//! Request types for the account lifecycle service

use serde::{Deserialize, Serialize};

/// Signup request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Email address, becomes the login identifier
    pub email: String,
    /// Plaintext password; hashed before it reaches the store
    pub password: String,
    /// Contact phone number for the verification challenge
    pub phone: String,
}

/// Login request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Plaintext password
    pub password: String,
}

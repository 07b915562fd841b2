//! Error type definitions for account lifecycle, token management, and
//! input validation. Messages are user-safe: no password, salt, or code
//! material ever appears in an error.

use thiserror::Error;

/// Account lifecycle and authentication errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("An account with this email already exists")]
    DuplicateEmail,

    #[error("Account not found")]
    AccountNotFound,

    /// Deliberately covers both unknown email and wrong password so callers
    /// cannot enumerate registered addresses.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account is already verified")]
    AlreadyVerified,

    #[error("Verification code does not match")]
    CodeMismatch,

    #[error("Verification code has expired")]
    CodeExpired,
}

/// Token validation and issuance errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Structural input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid length for field: {field} (expected {min} to {max} characters)")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
    },
}

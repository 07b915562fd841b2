//! Input validation utilities for signup and login payloads

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum accepted password length
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Maximum accepted password length
pub const PASSWORD_MAX_LENGTH: usize = 72;

// Intentionally loose: the canonical address check is delivery of mail,
// this only rejects obviously malformed input.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Check if a string is not empty after trimming
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string length is within bounds (inclusive)
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.len();
    len >= min && len <= max
}

/// Check if an email address is structurally valid
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check if a password meets the length policy
pub fn is_valid_password(password: &str) -> bool {
    length_between(password, PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH)
}

//! Shared utilities and configuration for the identity service
//!
//! This crate provides common functionality used across the server crates:
//! - Configuration types (JWT, password hashing, challenge windows, database)
//! - Utility functions (input validation, phone masking)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{ChallengeConfig, DatabaseConfig, HashConfig, JwtConfig};
pub use utils::{phone, validation};

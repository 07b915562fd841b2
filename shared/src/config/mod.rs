//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing and token lifetime configuration
//! - `challenge` - Verification challenge window configuration
//! - `database` - Database connection and pool configuration
//! - `hash` - Password hashing cost configuration

pub mod auth;
pub mod challenge;
pub mod database;
pub mod hash;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use challenge::ChallengeConfig;
pub use database::DatabaseConfig;
pub use hash::HashConfig;

//! Password hashing configuration

use serde::{Deserialize, Serialize};

/// Default bcrypt cost factor
pub const DEFAULT_HASH_COST: u32 = 12;

/// Configuration for the credential hasher
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct HashConfig {
    /// bcrypt cost factor (work factor doubles per increment)
    pub cost: u32,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            cost: DEFAULT_HASH_COST,
        }
    }
}

impl HashConfig {
    /// Create a configuration with an explicit cost factor, clamped to the
    /// range bcrypt accepts (4..=31).
    pub fn with_cost(cost: u32) -> Self {
        Self {
            cost: cost.clamp(4, 31),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Reads `HASH_COST`, falling back to the default cost.
    pub fn from_env() -> Self {
        let cost = std::env::var("HASH_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_HASH_COST);
        Self::with_cost(cost)
    }
}

//! Configuration for the account lifecycle service

use identity_shared::config::ChallengeConfig;

use crate::domain::entities::account::UserType;

/// Configuration for the account lifecycle service
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    /// Verification challenge window configuration
    pub challenge: ChallengeConfig,
    /// Account class assigned at signup
    pub default_user_type: UserType,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            challenge: ChallengeConfig::default(),
            default_user_type: UserType::Buyer,
        }
    }
}

//! Account profile value object: the account as exposed to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::account::{Account, UserType};

/// Public view of an account. Password hash and salt never leave the core;
/// this is the shape signup and profile reads return.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountProfile {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Email address
    pub email: String,

    /// Contact phone number
    pub phone: String,

    /// Class of account (buyer or seller)
    pub user_type: UserType,

    /// Whether the contact channel has been verified
    pub verified: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountProfile {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            phone: account.phone,
            user_type: account.user_type,
            verified: account.verified,
            created_at: account.created_at,
        }
    }
}

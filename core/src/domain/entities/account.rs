//! Account entity representing a registered identity in the service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the class of account in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// A customer purchasing through the marketplace; signup default
    Buyer,
    /// A merchant selling through the marketplace
    Seller,
}

impl UserType {
    /// Database/string representation of the account class
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Buyer => "buyer",
            UserType::Seller => "seller",
        }
    }

    /// Parse the database representation, defaulting unknown tags to `Buyer`
    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "seller" => UserType::Seller,
            _ => UserType::Buyer,
        }
    }
}

/// Fields required to create a new account; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Email address, unique across accounts
    pub email: String,

    /// Contact phone number for verification challenges
    pub phone: String,

    /// Salted password hash
    pub password_hash: String,

    /// Hex-encoded salt the hash was derived with
    pub password_salt: String,

    /// Class of account being created
    pub user_type: UserType,
}

/// Account entity holding a user's identity and credential record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Email address, unique and immutable after creation
    pub email: String,

    /// Contact phone number for verification challenges
    pub phone: String,

    /// Salted password hash
    pub password_hash: String,

    /// Hex-encoded salt the hash was derived with
    pub password_salt: String,

    /// Class of account (buyer or seller)
    pub user_type: UserType,

    /// Whether the contact channel has been verified
    pub verified: bool,

    /// Active verification code, paired with `code_expires_at`
    pub verification_code: Option<u32>,

    /// Expiry of the active verification code, paired with `verification_code`
    pub code_expires_at: Option<DateTime<Utc>>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates an Account from signup fields, assigning a fresh id.
    ///
    /// New accounts start unverified with no active challenge.
    pub fn from_new(new_account: NewAccount) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: new_account.email,
            phone: new_account.phone,
            password_hash: new_account.password_hash,
            password_salt: new_account.password_salt,
            user_type: new_account.user_type,
            verified: false,
            verification_code: None,
            code_expires_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Records a new verification challenge. Code and expiry are always
    /// written together; they are either both set or both absent.
    pub fn set_challenge(&mut self, code: u32, expires_at: DateTime<Utc>) {
        self.verification_code = Some(code);
        self.code_expires_at = Some(expires_at);
        self.updated_at = Utc::now();
    }

    /// Marks the account as verified. The stored code and expiry are left in
    /// place as a historical record of the completed challenge.
    pub fn mark_verified(&mut self) {
        self.verified = true;
        self.updated_at = Utc::now();
    }

    /// Checks whether a verification challenge is currently recorded
    pub fn has_challenge(&self) -> bool {
        self.verification_code.is_some() && self.code_expires_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn new_account() -> Account {
        Account::from_new(NewAccount {
            email: "a@x.com".to_string(),
            phone: "+15551234567".to_string(),
            password_hash: "hash".to_string(),
            password_salt: "salt".to_string(),
            user_type: UserType::Buyer,
        })
    }

    #[test]
    fn test_new_account_starts_unverified() {
        let account = new_account();
        assert!(!account.verified);
        assert!(!account.has_challenge());
        assert_eq!(account.user_type, UserType::Buyer);
    }

    #[test]
    fn test_set_challenge_pairs_code_and_expiry() {
        let mut account = new_account();
        let expires_at = Utc::now() + Duration::minutes(30);

        account.set_challenge(123456, expires_at);
        assert_eq!(account.verification_code, Some(123456));
        assert_eq!(account.code_expires_at, Some(expires_at));
        assert!(account.has_challenge());
    }

    #[test]
    fn test_mark_verified_keeps_challenge_history() {
        let mut account = new_account();
        let expires_at = Utc::now() + Duration::minutes(30);
        account.set_challenge(654321, expires_at);

        account.mark_verified();
        assert!(account.verified);
        assert_eq!(account.verification_code, Some(654321));
        assert_eq!(account.code_expires_at, Some(expires_at));
    }

    #[test]
    fn test_user_type_round_trip() {
        assert_eq!(UserType::from_str_or_default("seller"), UserType::Seller);
        assert_eq!(UserType::from_str_or_default("buyer"), UserType::Buyer);
        assert_eq!(UserType::from_str_or_default("garbage"), UserType::Buyer);
        assert_eq!(UserType::Seller.as_str(), "seller");
    }

    #[test]
    fn test_user_type_serialization() {
        let json = serde_json::to_string(&UserType::Buyer).unwrap();
        assert_eq!(json, "\"buyer\"");
    }
}

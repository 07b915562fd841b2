//! Account store trait defining the interface for account persistence.
//!
//! Every operation is atomic with respect to a single account row; the
//! verification writes are conditional updates guarded by the row's
//! `verified` flag, so no locking beyond the store's own row atomicity is
//! required.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::account::{Account, NewAccount};
use crate::errors::DomainError;

/// Repository trait for account persistence operations
///
/// Implementations handle the actual storage while maintaining the
/// abstraction boundary between domain and infrastructure layers. The
/// orchestrating service takes this trait as an explicit constructor
/// parameter, so tests substitute the in-memory mock.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Create a new account with a freshly assigned id
    ///
    /// # Returns
    /// * `Ok(Account)` - The created account, unverified, with no challenge
    /// * `Err(AuthError::DuplicateEmail)` - Email already registered
    async fn create_account(&self, new_account: NewAccount) -> Result<Account, DomainError>;

    /// Find an account by its email address
    ///
    /// # Returns
    /// * `Ok(Account)` - Account found
    /// * `Err(AuthError::AccountNotFound)` - No account with this email
    async fn find_by_email(&self, email: &str) -> Result<Account, DomainError>;

    /// Record a verification challenge on an unverified account
    ///
    /// Conditional update (`WHERE verified = FALSE`): a verified account is
    /// never re-challenged. Code and expiry are written together.
    ///
    /// # Returns
    /// * `Ok(Account)` - Updated account carrying the new challenge
    /// * `Err(AuthError::AlreadyVerified)` - Account is already verified
    /// * `Err(AuthError::AccountNotFound)` - No account with this id
    async fn set_verification_challenge(
        &self,
        account_id: Uuid,
        code: u32,
        expires_at: DateTime<Utc>,
    ) -> Result<Account, DomainError>;

    /// Flip an unverified account to verified
    ///
    /// Conditional update (`WHERE verified = FALSE`). The stored code and
    /// expiry are left untouched as a historical record.
    ///
    /// # Returns
    /// * `Ok(Account)` - Updated, now-verified account
    /// * `Err(AuthError::AlreadyVerified)` - Account was already verified
    /// * `Err(AuthError::AccountNotFound)` - No account with this id
    async fn mark_verified(&self, account_id: Uuid) -> Result<Account, DomainError>;
}

//! In-memory implementation of AccountStore for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::{Account, NewAccount};
use crate::errors::{AuthError, DomainError};

use super::trait_::AccountStore;

/// In-memory account store for tests and local development.
///
/// Writes happen under a single `RwLock`, which gives the same per-row
/// atomicity guarantee the conditional SQL updates provide in production.
pub struct MockAccountStore {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl MockAccountStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of accounts currently stored
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Whether the store holds no accounts
    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

impl Default for MockAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for MockAccountStore {
    async fn create_account(&self, new_account: NewAccount) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.email == new_account.email) {
            return Err(AuthError::DuplicateEmail.into());
        }

        let account = Account::from_new(new_account);
        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Account, DomainError> {
        let accounts = self.accounts.read().await;
        accounts
            .values()
            .find(|a| a.email == email)
            .cloned()
            .ok_or_else(|| AuthError::AccountNotFound.into())
    }

    async fn set_verification_challenge(
        &self,
        account_id: Uuid,
        code: u32,
        expires_at: DateTime<Utc>,
    ) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(&account_id)
            .ok_or(AuthError::AccountNotFound)?;

        if account.verified {
            return Err(AuthError::AlreadyVerified.into());
        }

        account.set_challenge(code, expires_at);
        Ok(account.clone())
    }

    async fn mark_verified(&self, account_id: Uuid) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(&account_id)
            .ok_or(AuthError::AccountNotFound)?;

        if account.verified {
            return Err(AuthError::AlreadyVerified.into());
        }

        account.mark_verified();
        Ok(account.clone())
    }
}

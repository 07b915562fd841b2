//! PostgreSQL implementation of the AccountStore trait.
//!
//! Verification writes are single-statement conditional updates
//! (`WHERE verified = FALSE`); a zero-row result means the guard tripped.
//! Row atomicity in Postgres is the only concurrency control this needs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use identity_core::domain::entities::account::{Account, NewAccount, UserType};
use identity_core::errors::{AuthError, DomainError};
use identity_core::repositories::AccountStore;

const ACCOUNT_COLUMNS: &str = "id, email, phone, password_hash, password_salt, user_type, \
                               verified, verification_code, code_expires_at, created_at, updated_at";

/// PostgreSQL implementation of AccountStore
pub struct PgAccountStore {
    /// Database connection pool
    pool: PgPool,
}

impl PgAccountStore {
    /// Create a new PostgreSQL account store
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Account entity
    fn row_to_account(row: &sqlx::postgres::PgRow) -> Result<Account, DomainError> {
        let user_type: String = row
            .try_get("user_type")
            .map_err(|e| Self::column_error("user_type", e))?;
        let verification_code: Option<i32> = row
            .try_get("verification_code")
            .map_err(|e| Self::column_error("verification_code", e))?;

        Ok(Account {
            id: row.try_get("id").map_err(|e| Self::column_error("id", e))?,
            email: row
                .try_get("email")
                .map_err(|e| Self::column_error("email", e))?,
            phone: row
                .try_get("phone")
                .map_err(|e| Self::column_error("phone", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| Self::column_error("password_hash", e))?,
            password_salt: row
                .try_get("password_salt")
                .map_err(|e| Self::column_error("password_salt", e))?,
            user_type: UserType::from_str_or_default(&user_type),
            verified: row
                .try_get("verified")
                .map_err(|e| Self::column_error("verified", e))?,
            verification_code: verification_code.map(|code| code as u32),
            code_expires_at: row
                .try_get("code_expires_at")
                .map_err(|e| Self::column_error("code_expires_at", e))?,
            created_at: row
                .try_get("created_at")
                .map_err(|e| Self::column_error("created_at", e))?,
            updated_at: row
                .try_get("updated_at")
                .map_err(|e| Self::column_error("updated_at", e))?,
        })
    }

    fn column_error(column: &str, err: sqlx::Error) -> DomainError {
        DomainError::Internal {
            message: format!("failed to read column {}: {}", column, err),
        }
    }

    fn query_error(err: sqlx::Error) -> DomainError {
        DomainError::Internal {
            message: format!("database query failed: {}", err),
        }
    }

    /// Whether an account row with this id exists at all; used to tell
    /// `AccountNotFound` apart from a tripped `verified = FALSE` guard.
    async fn account_exists(&self, account_id: Uuid) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT 1 FROM accounts WHERE id = $1")
            .bind(account_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::query_error)?;
        Ok(row.is_some())
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create_account(&self, new_account: NewAccount) -> Result<Account, DomainError> {
        let account = Account::from_new(new_account);

        let query = format!(
            "INSERT INTO accounts (id, email, phone, password_hash, password_salt, user_type, \
             verified, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {}",
            ACCOUNT_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(account.id)
            .bind(&account.email)
            .bind(&account.phone)
            .bind(&account.password_hash)
            .bind(&account.password_salt)
            .bind(account.user_type.as_str())
            .bind(account.verified)
            .bind(account.created_at)
            .bind(account.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                // Unique violation on the email column
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.code().as_deref() == Some("23505") {
                        return AuthError::DuplicateEmail.into();
                    }
                }
                Self::query_error(e)
            })?;

        Self::row_to_account(&row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Account, DomainError> {
        let query = format!(
            "SELECT {} FROM accounts WHERE email = $1 LIMIT 1",
            ACCOUNT_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::query_error)?;

        match row {
            Some(row) => Self::row_to_account(&row),
            None => Err(AuthError::AccountNotFound.into()),
        }
    }

    async fn set_verification_challenge(
        &self,
        account_id: Uuid,
        code: u32,
        expires_at: DateTime<Utc>,
    ) -> Result<Account, DomainError> {
        let query = format!(
            "UPDATE accounts \
             SET verification_code = $1, code_expires_at = $2, updated_at = $3 \
             WHERE id = $4 AND verified = FALSE \
             RETURNING {}",
            ACCOUNT_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(code as i32)
            .bind(expires_at)
            .bind(Utc::now())
            .bind(account_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::query_error)?;

        match row {
            Some(row) => Self::row_to_account(&row),
            None if self.account_exists(account_id).await? => {
                Err(AuthError::AlreadyVerified.into())
            }
            None => Err(AuthError::AccountNotFound.into()),
        }
    }

    async fn mark_verified(&self, account_id: Uuid) -> Result<Account, DomainError> {
        // Code and expiry stay on the row as a record of the completed
        // challenge.
        let query = format!(
            "UPDATE accounts \
             SET verified = TRUE, updated_at = $1 \
             WHERE id = $2 AND verified = FALSE \
             RETURNING {}",
            ACCOUNT_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(Utc::now())
            .bind(account_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::query_error)?;

        match row {
            Some(row) => Self::row_to_account(&row),
            None if self.account_exists(account_id).await? => {
                Err(AuthError::AlreadyVerified.into())
            }
            None => Err(AuthError::AccountNotFound.into()),
        }
    }
}

//! Account lifecycle service implementation

use std::sync::Arc;

use chrono::Utc;

use identity_shared::utils::phone::{is_plausible_phone, mask_phone};
use identity_shared::utils::validation::{
    is_valid_email, is_valid_password, not_empty, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH,
};

use crate::domain::entities::account::NewAccount;
use crate::domain::entities::challenge::Challenge;
use crate::domain::entities::token::Claims;
use crate::domain::value_objects::{
    AccountProfile, ChallengeIssued, ChallengeVerified, LoginResponse,
};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::AccountStore;
use crate::services::credential::CredentialHasher;
use crate::services::notification::NotificationSender;
use crate::services::token::TokenService;

use super::config::AccountServiceConfig;
use super::types::{LoginRequest, SignupRequest};

/// Account lifecycle service: signup, login, challenge issue and verify.
///
/// Dependencies are explicit constructor parameters so tests substitute the
/// in-memory store and a recording notifier.
pub struct AccountService<S, N>
where
    S: AccountStore,
    N: NotificationSender,
{
    /// Account store owning the only mutable state
    store: Arc<S>,
    /// External collaborator delivering verification codes
    notifier: Arc<N>,
    /// Salted password hashing
    hasher: CredentialHasher,
    /// Bearer token issuance and validation
    tokens: TokenService,
    /// Service configuration
    config: AccountServiceConfig,
}

impl<S, N> AccountService<S, N>
where
    S: AccountStore,
    N: NotificationSender,
{
    /// Create a new account lifecycle service
    pub fn new(
        store: Arc<S>,
        notifier: Arc<N>,
        hasher: CredentialHasher,
        tokens: TokenService,
        config: AccountServiceConfig,
    ) -> Self {
        Self {
            store,
            notifier,
            hasher,
            tokens,
            config,
        }
    }

    /// Create an account from a signup request.
    ///
    /// Validates the payload shape, derives the salted hash, and persists a
    /// new unverified account. The response never carries password material.
    pub async fn signup(&self, request: SignupRequest) -> DomainResult<AccountProfile> {
        Self::validate_signup(&request)?;

        let salt = self.hasher.generate_salt()?;
        let password_hash = self.hasher.hash_password(&request.password, &salt)?;

        let account = self
            .store
            .create_account(NewAccount {
                email: request.email.trim().to_string(),
                phone: request.phone.trim().to_string(),
                password_hash,
                password_salt: salt,
                user_type: self.config.default_user_type,
            })
            .await?;

        tracing::info!(
            account_id = %account.id,
            phone = %mask_phone(&account.phone),
            event = "account_created",
            "new account registered"
        );

        Ok(AccountProfile::from(account))
    }

    /// Authenticate an account and issue a bearer token.
    ///
    /// Unknown email and wrong password both surface `InvalidCredentials`;
    /// the distinction exists only in debug logs so callers cannot probe
    /// which addresses are registered.
    pub async fn login(&self, request: LoginRequest) -> DomainResult<LoginResponse> {
        let account = match self.store.find_by_email(request.email.trim()).await {
            Ok(account) => account,
            Err(DomainError::Auth(AuthError::AccountNotFound)) => {
                tracing::debug!(event = "login_failed", reason = "unknown_email");
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => return Err(e),
        };

        let password_matches = self.hasher.verify_password(
            &request.password,
            &account.password_hash,
            &account.password_salt,
        )?;
        if !password_matches {
            tracing::debug!(
                account_id = %account.id,
                event = "login_failed",
                reason = "password_mismatch"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&account)?;
        tracing::info!(account_id = %account.id, event = "login_succeeded", "login succeeded");

        Ok(LoginResponse::new(token, self.tokens.expires_in_seconds()))
    }

    /// Issue a verification challenge for the authenticated account.
    ///
    /// Generates a fresh code, records it through the store's conditional
    /// update, and hands `(code, phone)` to the notification collaborator.
    /// Delivery failure is logged but never fails the request.
    pub async fn issue_challenge(&self, bearer_token: &str) -> DomainResult<ChallengeIssued> {
        let claims = self.authenticate(bearer_token)?;
        let account_id = claims.account_id().map_err(|_| DomainError::Unauthorized)?;

        let challenge = Challenge::new_with_expiration(self.config.challenge.expiration_minutes);
        let account = self
            .store
            .set_verification_challenge(account_id, challenge.code, challenge.expires_at)
            .await?;

        tracing::info!(
            account_id = %account.id,
            expires_at = %challenge.expires_at,
            event = "challenge_issued",
            "verification challenge issued"
        );

        if let Err(reason) = self
            .notifier
            .send_verification_code(&account.phone, challenge.code)
            .await
        {
            tracing::warn!(
                account_id = %account.id,
                phone = %mask_phone(&account.phone),
                reason = %reason,
                event = "notification_failed",
                "verification code delivery failed"
            );
        }

        Ok(ChallengeIssued::new())
    }

    /// Complete a verification challenge for the authenticated account.
    ///
    /// A non-matching code is a hard `CodeMismatch` failure; a matching code
    /// past its window fails `CodeExpired` and leaves the account
    /// unverified. On success the account flips to verified exactly once;
    /// repeating the call fails `AlreadyVerified` from the store guard.
    pub async fn verify_challenge(
        &self,
        bearer_token: &str,
        submitted_code: &str,
    ) -> DomainResult<ChallengeVerified> {
        let claims = self.authenticate(bearer_token)?;
        let account = self.store.find_by_email(&claims.email).await?;

        let submitted: u32 = submitted_code
            .trim()
            .parse()
            .map_err(|_| AuthError::CodeMismatch)?;

        let (code, expires_at) = match (account.verification_code, account.code_expires_at) {
            (Some(code), Some(expires_at)) => (code, expires_at),
            _ => return Err(AuthError::CodeMismatch.into()),
        };

        if submitted != code {
            tracing::debug!(
                account_id = %account.id,
                event = "verification_failed",
                reason = "code_mismatch"
            );
            return Err(AuthError::CodeMismatch.into());
        }

        // Window is inclusive at generation, exclusive at the expiry instant
        if Utc::now() >= expires_at {
            tracing::debug!(
                account_id = %account.id,
                event = "verification_failed",
                reason = "code_expired"
            );
            return Err(AuthError::CodeExpired.into());
        }

        self.store.mark_verified(account.id).await?;
        tracing::info!(account_id = %account.id, event = "account_verified", "account verified");

        Ok(ChallengeVerified::new())
    }

    /// Validate a bearer token, collapsing every token failure into
    /// `Unauthorized` at this boundary.
    fn authenticate(&self, bearer_token: &str) -> DomainResult<Claims> {
        self.tokens.validate(bearer_token).map_err(|e| {
            tracing::debug!(error = %e, event = "token_rejected", "bearer token rejected");
            DomainError::Unauthorized
        })
    }

    fn validate_signup(request: &SignupRequest) -> DomainResult<()> {
        if !not_empty(&request.email) {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            }
            .into());
        }
        if !is_valid_email(request.email.trim()) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if !is_valid_password(&request.password) {
            return Err(ValidationError::InvalidLength {
                field: "password".to_string(),
                min: PASSWORD_MIN_LENGTH,
                max: PASSWORD_MAX_LENGTH,
            }
            .into());
        }
        if !not_empty(&request.phone) {
            return Err(ValidationError::RequiredField {
                field: "phone".to_string(),
            }
            .into());
        }
        if !is_plausible_phone(request.phone.trim()) {
            return Err(ValidationError::InvalidFormat {
                field: "phone".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

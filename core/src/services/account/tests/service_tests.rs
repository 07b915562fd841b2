//! End-to-end tests for the account lifecycle state machine

use std::sync::Arc;

use chrono::{Duration, Utc};

use identity_shared::config::{ChallengeConfig, HashConfig, JwtConfig};

use crate::domain::entities::account::UserType;
use crate::domain::entities::challenge::{CODE_MIN, CODE_SPAN};
use crate::domain::value_objects::{CHALLENGE_SENT_MESSAGE, VERIFIED_MESSAGE};
use crate::errors::{AuthError, DomainError};
use crate::repositories::account::{AccountStore, MockAccountStore};
use crate::services::account::{AccountService, AccountServiceConfig, LoginRequest, SignupRequest};
use crate::services::credential::CredentialHasher;
use crate::services::token::TokenService;

use super::mocks::MockNotifier;

const TEST_SECRET: &str = "test-signing-secret-0123456789";

fn build_service(
    store: Arc<MockAccountStore>,
    notifier: Arc<MockNotifier>,
) -> AccountService<MockAccountStore, MockNotifier> {
    AccountService::new(
        store,
        notifier,
        // Minimum bcrypt cost keeps the suite fast
        CredentialHasher::new(HashConfig::with_cost(4)),
        TokenService::new(JwtConfig::new(TEST_SECRET)).unwrap(),
        AccountServiceConfig::default(),
    )
}

fn service() -> AccountService<MockAccountStore, MockNotifier> {
    build_service(
        Arc::new(MockAccountStore::new()),
        Arc::new(MockNotifier::new()),
    )
}

fn signup_request() -> SignupRequest {
    SignupRequest {
        email: "a@x.com".to_string(),
        password: "secret1".to_string(),
        phone: "+15551234567".to_string(),
    }
}

fn login_request() -> LoginRequest {
    LoginRequest {
        email: "a@x.com".to_string(),
        password: "secret1".to_string(),
    }
}

#[tokio::test]
async fn test_signup_creates_unverified_account() {
    let service = service();

    let profile = service.signup(signup_request()).await.unwrap();
    assert_eq!(profile.email, "a@x.com");
    assert_eq!(profile.phone, "+15551234567");
    assert_eq!(profile.user_type, UserType::Buyer);
    assert!(!profile.verified);
}

#[tokio::test]
async fn test_signup_rejects_duplicate_email() {
    let service = service();
    service.signup(signup_request()).await.unwrap();

    let err = service.signup(signup_request()).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::DuplicateEmail)));
}

#[tokio::test]
async fn test_signup_validates_shape() {
    let service = service();

    let mut bad = signup_request();
    bad.email = "".to_string();
    assert!(matches!(
        service.signup(bad).await.unwrap_err(),
        DomainError::ValidationErr(_)
    ));

    let mut bad = signup_request();
    bad.email = "not-an-email".to_string();
    assert!(matches!(
        service.signup(bad).await.unwrap_err(),
        DomainError::ValidationErr(_)
    ));

    let mut bad = signup_request();
    bad.password = "short".to_string();
    assert!(matches!(
        service.signup(bad).await.unwrap_err(),
        DomainError::ValidationErr(_)
    ));

    let mut bad = signup_request();
    bad.phone = "  ".to_string();
    assert!(matches!(
        service.signup(bad).await.unwrap_err(),
        DomainError::ValidationErr(_)
    ));
}

#[tokio::test]
async fn test_signup_then_login_round_trip() {
    let service = service();
    let profile = service.signup(signup_request()).await.unwrap();

    let response = service.login(login_request()).await.unwrap();
    assert!(response.expires_in > 0);

    // The token decodes back to the created account
    let tokens = TokenService::new(JwtConfig::new(TEST_SECRET)).unwrap();
    let claims = tokens.validate(&response.token).unwrap();
    assert_eq!(claims.account_id().unwrap(), profile.id);
    assert_eq!(claims.email, profile.email);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let service = service();
    service.signup(signup_request()).await.unwrap();

    let wrong_password = service
        .login(LoginRequest {
            email: "a@x.com".to_string(),
            password: "wrong-password".to_string(),
        })
        .await
        .unwrap_err();
    let unknown_email = service
        .login(LoginRequest {
            email: "nobody@x.com".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .unwrap_err();

    // Same external shape for both failure modes
    assert!(matches!(
        wrong_password,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        unknown_email,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
}

#[tokio::test]
async fn test_issue_challenge_stores_code_and_notifies() {
    let store = Arc::new(MockAccountStore::new());
    let notifier = Arc::new(MockNotifier::new());
    let service = build_service(store.clone(), notifier.clone());

    service.signup(signup_request()).await.unwrap();
    let token = service.login(login_request()).await.unwrap().token;

    let issued = service.issue_challenge(&token).await.unwrap();
    assert_eq!(issued.message, CHALLENGE_SENT_MESSAGE);

    let account = store.find_by_email("a@x.com").await.unwrap();
    let code = account.verification_code.expect("code stored");
    let expires_at = account.code_expires_at.expect("expiry stored");

    assert!(code >= CODE_MIN && code < CODE_MIN + CODE_SPAN);
    let window = expires_at - Utc::now();
    assert!(window > Duration::minutes(29));
    assert!(window <= Duration::minutes(30));

    // The collaborator received the same code that was stored
    assert_eq!(notifier.last_code(), Some(code));
    assert_eq!(notifier.sent.lock().unwrap()[0].0, "+15551234567");
}

#[tokio::test]
async fn test_issue_challenge_requires_valid_token() {
    let service = service();
    service.signup(signup_request()).await.unwrap();

    let err = service.issue_challenge("garbage-token").await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));
}

#[tokio::test]
async fn test_notification_failure_does_not_fail_the_request() {
    let store = Arc::new(MockAccountStore::new());
    let service = build_service(store.clone(), Arc::new(MockNotifier::failing()));

    service.signup(signup_request()).await.unwrap();
    let token = service.login(login_request()).await.unwrap().token;

    service.issue_challenge(&token).await.unwrap();

    // The challenge was still recorded
    let account = store.find_by_email("a@x.com").await.unwrap();
    assert!(account.verification_code.is_some());
}

#[tokio::test]
async fn test_full_verification_scenario() {
    let store = Arc::new(MockAccountStore::new());
    let notifier = Arc::new(MockNotifier::new());
    let service = build_service(store.clone(), notifier.clone());

    let profile = service.signup(signup_request()).await.unwrap();
    assert!(!profile.verified);

    let token = service.login(login_request()).await.unwrap().token;
    service.issue_challenge(&token).await.unwrap();

    let code = notifier.last_code().unwrap();
    let verified = service
        .verify_challenge(&token, &code.to_string())
        .await
        .unwrap();
    assert_eq!(verified.message, VERIFIED_MESSAGE);

    let account = store.find_by_email("a@x.com").await.unwrap();
    assert!(account.verified);

    // Verification happens exactly once; the repeat trips the store guard
    let err = service
        .verify_challenge(&token, &code.to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::AlreadyVerified)));

    // A verified account can never be re-challenged
    let err = service.issue_challenge(&token).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::AlreadyVerified)));
}

#[tokio::test]
async fn test_wrong_code_is_a_hard_failure() {
    let store = Arc::new(MockAccountStore::new());
    let notifier = Arc::new(MockNotifier::new());
    let service = build_service(store.clone(), notifier.clone());

    service.signup(signup_request()).await.unwrap();
    let token = service.login(login_request()).await.unwrap().token;
    service.issue_challenge(&token).await.unwrap();

    // Guaranteed wrong: outside the generation range
    let err = service.verify_challenge(&token, "1").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::CodeMismatch)));

    let err = service
        .verify_challenge(&token, "not-a-number")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::CodeMismatch)));

    let account = store.find_by_email("a@x.com").await.unwrap();
    assert!(!account.verified);
}

#[tokio::test]
async fn test_verify_without_challenge_is_a_mismatch() {
    let service = service();
    service.signup(signup_request()).await.unwrap();
    let token = service.login(login_request()).await.unwrap().token;

    let err = service.verify_challenge(&token, "123456").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::CodeMismatch)));
}

#[tokio::test]
async fn test_expired_code_leaves_account_unverified() {
    let store = Arc::new(MockAccountStore::new());
    let notifier = Arc::new(MockNotifier::new());
    let service = build_service(store.clone(), notifier.clone());

    service.signup(signup_request()).await.unwrap();
    let token = service.login(login_request()).await.unwrap().token;

    // Plant a challenge whose window has already elapsed
    let account = store.find_by_email("a@x.com").await.unwrap();
    store
        .set_verification_challenge(account.id, 123456, Utc::now() - Duration::minutes(1))
        .await
        .unwrap();

    let err = service.verify_challenge(&token, "123456").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::CodeExpired)));

    let account = store.find_by_email("a@x.com").await.unwrap();
    assert!(!account.verified);
}

#[tokio::test]
async fn test_code_at_its_expiry_instant_is_already_expired() {
    let store = Arc::new(MockAccountStore::new());
    let notifier = Arc::new(MockNotifier::new());
    let service = build_service(store.clone(), notifier.clone());

    service.signup(signup_request()).await.unwrap();
    let token = service.login(login_request()).await.unwrap().token;

    // The window is exclusive at the expiry instant: a code expiring now
    // (or any instant at or before the comparison) must be rejected.
    let account = store.find_by_email("a@x.com").await.unwrap();
    store
        .set_verification_challenge(account.id, 123456, Utc::now())
        .await
        .unwrap();

    let err = service.verify_challenge(&token, "123456").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::CodeExpired)));

    let account = store.find_by_email("a@x.com").await.unwrap();
    assert!(!account.verified);
}

#[tokio::test]
async fn test_verify_challenge_requires_valid_token() {
    let service = service();
    let err = service
        .verify_challenge("garbage-token", "123456")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));
}

#[tokio::test]
async fn test_custom_challenge_window_is_honored() {
    let store = Arc::new(MockAccountStore::new());
    let notifier = Arc::new(MockNotifier::new());
    let service = AccountService::new(
        store.clone(),
        notifier,
        CredentialHasher::new(HashConfig::with_cost(4)),
        TokenService::new(JwtConfig::new(TEST_SECRET)).unwrap(),
        AccountServiceConfig {
            challenge: ChallengeConfig {
                expiration_minutes: 5,
            },
            ..Default::default()
        },
    );

    service.signup(signup_request()).await.unwrap();
    let token = service.login(login_request()).await.unwrap().token;
    service.issue_challenge(&token).await.unwrap();

    let account = store.find_by_email("a@x.com").await.unwrap();
    let window = account.code_expires_at.unwrap() - Utc::now();
    assert!(window <= Duration::minutes(5));
    assert!(window > Duration::minutes(4));
}

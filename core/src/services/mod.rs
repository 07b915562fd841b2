//! Business services implementing the account lifecycle.

pub mod account;
pub mod credential;
pub mod notification;
pub mod token;

// Re-export commonly used types
pub use account::{AccountService, AccountServiceConfig, LoginRequest, SignupRequest};
pub use credential::CredentialHasher;
pub use notification::NotificationSender;
pub use token::TokenService;

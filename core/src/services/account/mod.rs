//! Account lifecycle module
//!
//! Orchestrates the account state machine:
//! `Unverified(no challenge)` -> `Unverified(challenge pending)` -> `Verified`.
//! Composes the credential hasher, token service, and challenge generation
//! over an [`AccountStore`](crate::repositories::AccountStore) and a
//! [`NotificationSender`](crate::services::notification::NotificationSender).

mod config;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::AccountServiceConfig;
pub use service::AccountService;
pub use types::{LoginRequest, SignupRequest};

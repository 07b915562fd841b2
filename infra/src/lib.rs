//! # Infrastructure Layer
//!
//! Concrete implementations behind the core's interfaces:
//! - **Database**: PostgreSQL account store using SQLx
//! - **Notification**: verification code delivery (mock SMS for development)
//!
//! Infrastructure failures are wrapped in [`InfrastructureError`] and cross
//! into the domain as generic internal failures; the core never retries
//! them.

use thiserror::Error;

use identity_core::errors::DomainError;

pub mod database;
pub mod notification;

/// Errors raised by infrastructure components
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Internal {
            message: err.to_string(),
        }
    }
}

//! Notification seam for verification code delivery
//!
//! Delivery over a real channel is an external collaborator's concern; the
//! core only hands `(phone, code)` across this trait and never blocks the
//! caller on delivery success.

use async_trait::async_trait;

/// Trait for the external notification collaborator
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Deliver a verification code to a phone number.
    ///
    /// Returns a provider message id on success, or an error description.
    async fn send_verification_code(&self, phone: &str, code: u32) -> Result<String, String>;
}

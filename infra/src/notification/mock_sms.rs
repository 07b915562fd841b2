//! Mock SMS sender
//!
//! Implements the core notification seam by logging codes to the console
//! instead of sending them. Used for development and testing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use identity_core::services::NotificationSender;
use identity_shared::utils::phone::mask_phone;

/// Mock SMS sender for development and testing
///
/// This implementation:
/// - Logs verification codes to console
/// - Generates mock message IDs
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockSmsSender {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockSmsSender {
    /// Create a new mock SMS sender
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock sender with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockSmsSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSender for MockSmsSender {
    async fn send_verification_code(&self, phone: &str, code: u32) -> Result<String, String> {
        let masked_phone = mask_phone(phone);

        if self.simulate_failure {
            warn!(
                event = "sms_delivery_failed",
                provider = "mock",
                phone = %masked_phone,
                "simulated SMS delivery failure"
            );
            return Err("simulated SMS delivery failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK SMS - MESSAGE #{}", count);
            println!("To: {}", masked_phone);
            println!("Message ID: {}", message_id);
            println!("Your verification code is {}", code);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            event = "sms_sent",
            provider = "mock",
            phone = %masked_phone,
            message_id = %message_id,
            "verification code delivered (mock)"
        );

        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_returns_mock_message_id() {
        let sender = MockSmsSender::with_options(false, false);
        let result = sender.send_verification_code("+12345678901", 123456).await;

        assert!(result.is_ok());
        assert!(result.unwrap().starts_with("mock_"));
        assert_eq!(sender.message_count(), 1);
    }

    #[tokio::test]
    async fn test_simulated_failure() {
        let sender = MockSmsSender::with_options(false, true);
        let result = sender.send_verification_code("+12345678901", 123456).await;

        assert!(result.is_err());
        assert_eq!(sender.message_count(), 0);
    }

    #[tokio::test]
    async fn test_counter_tracks_messages() {
        let sender = MockSmsSender::with_options(false, false);

        for i in 1..=3 {
            let _ = sender.send_verification_code("+12345678901", 100_000 + i).await;
            assert_eq!(sender.message_count(), i as u64);
        }

        sender.reset_counter();
        assert_eq!(sender.message_count(), 0);
    }
}

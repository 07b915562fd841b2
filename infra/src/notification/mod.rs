//! Notification channel implementations
//!
//! Delivery of verification codes to account phone numbers. The only
//! implementation shipped here logs the message instead of hitting a
//! real SMS provider.

mod mock_sms;

pub use mock_sms::MockSmsSender;

//! Verification challenge entity: a short-lived numeric code proving
//! ownership of a contact channel.

use chrono::{DateTime, Duration, Utc};
use identity_shared::config::challenge::DEFAULT_CHALLENGE_WINDOW_MINUTES;
use rand::Rng;

/// Lowest code value; keeps every code at 5-6 digits
pub const CODE_MIN: u32 = 10_000;

/// Width of the code range; codes are drawn from `CODE_MIN..CODE_MIN + CODE_SPAN`
pub const CODE_SPAN: u32 = 900_000;

/// A verification challenge: a numeric code plus its expiry instant.
///
/// The code is live from the instant it is generated up to, but not
/// including, `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    /// The 5-6 digit verification code
    pub code: u32,

    /// Timestamp when the challenge was generated
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code stops being accepted
    pub expires_at: DateTime<Utc>,
}

impl Challenge {
    /// Creates a challenge with the default 30 minute window
    pub fn new() -> Self {
        Self::new_with_expiration(DEFAULT_CHALLENGE_WINDOW_MINUTES)
    }

    /// Creates a challenge with a custom expiration window
    pub fn new_with_expiration(expiration_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            code: Self::generate_code(),
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
        }
    }

    /// Draws a code uniformly from the fixed range
    fn generate_code() -> u32 {
        let mut rng = rand::thread_rng();
        rng.gen_range(CODE_MIN..CODE_MIN + CODE_SPAN)
    }

    /// Checks whether the challenge window has elapsed
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

impl Default for Challenge {
    fn default() -> Self {
        Self::new()
    }
}

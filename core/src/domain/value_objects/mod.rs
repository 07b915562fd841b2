//! Value objects returned by the account lifecycle services.

pub mod account_profile;
pub mod auth_response;

pub use account_profile::AccountProfile;
pub use auth_response::{
    ChallengeIssued, ChallengeVerified, LoginResponse, CHALLENGE_SENT_MESSAGE, VERIFIED_MESSAGE,
};

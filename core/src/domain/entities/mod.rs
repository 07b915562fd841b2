//! Domain entities representing core business objects.

pub mod account;
pub mod challenge;
pub mod token;

// Re-export commonly used types
pub use account::{Account, NewAccount, UserType};
pub use challenge::{Challenge, CODE_MIN, CODE_SPAN};
pub use token::{Claims, JWT_AUDIENCE, JWT_ISSUER};

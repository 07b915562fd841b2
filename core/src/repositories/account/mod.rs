//! Account store: persistence interface for account rows plus an
//! in-memory implementation for tests and local development.

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub mod mock;

#[cfg(test)]
mod tests;

pub use mock::MockAccountStore;
pub use r#trait::AccountStore;

//! Repository interfaces owning the service's only mutable state.

pub mod account;

pub use account::AccountStore;

#[cfg(test)]
pub use account::MockAccountStore;

//! Credential hashing module
//!
//! Derives and verifies salted password hashes. Salts are generated from
//! the OS entropy source; hashing is bcrypt with an explicit salt so the
//! same inputs always produce the same digest.

mod hasher;

pub use hasher::{CredentialHasher, SALT_LENGTH};

//! Salted password hashing and verification

use constant_time_eq::constant_time_eq;
use identity_shared::config::HashConfig;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::DomainError;

/// Raw salt length in bytes (stored hex-encoded, so 32 characters)
pub const SALT_LENGTH: usize = 16;

/// Derives and verifies salted password hashes with bcrypt.
///
/// The cost factor is process-wide configuration, read-only after startup.
#[derive(Debug, Clone)]
pub struct CredentialHasher {
    config: HashConfig,
}

impl CredentialHasher {
    /// Create a hasher with the given cost configuration
    pub fn new(config: HashConfig) -> Self {
        Self { config }
    }

    /// Generate a fresh random salt, hex-encoded.
    ///
    /// Entropy source failure is fatal and is not retried.
    pub fn generate_salt(&self) -> Result<String, DomainError> {
        let mut salt = [0u8; SALT_LENGTH];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| DomainError::Internal {
                message: format!("entropy source failure: {}", e),
            })?;
        Ok(hex::encode(salt))
    }

    /// Hash a plaintext password with the given hex-encoded salt.
    ///
    /// Deterministic: equal plaintext and salt always yield the same digest.
    pub fn hash_password(&self, plaintext: &str, salt: &str) -> Result<String, DomainError> {
        let salt = Self::decode_salt(salt)?;
        let parts =
            bcrypt::hash_with_salt(plaintext, self.config.cost, salt).map_err(|e| {
                DomainError::Internal {
                    message: format!("password hashing failed: {}", e),
                }
            })?;
        Ok(parts.to_string())
    }

    /// Verify a plaintext password against a stored hash and salt.
    ///
    /// Recomputes the digest and compares in constant time. The plaintext is
    /// never logged.
    pub fn verify_password(
        &self,
        plaintext: &str,
        expected_hash: &str,
        salt: &str,
    ) -> Result<bool, DomainError> {
        let computed = self.hash_password(plaintext, salt)?;
        Ok(constant_time_eq(
            computed.as_bytes(),
            expected_hash.as_bytes(),
        ))
    }

    fn decode_salt(salt: &str) -> Result<[u8; SALT_LENGTH], DomainError> {
        let bytes = hex::decode(salt).map_err(|_| DomainError::Internal {
            message: "stored salt is not valid hex".to_string(),
        })?;
        bytes.try_into().map_err(|_| DomainError::Internal {
            message: "stored salt has unexpected length".to_string(),
        })
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new(HashConfig::default())
    }
}

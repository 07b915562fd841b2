//! Token issuance and validation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use identity_shared::config::JwtConfig;

use crate::domain::entities::account::Account;
use crate::domain::entities::token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::{DomainError, TokenError};

/// Service issuing and validating the signed bearer credential
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}

impl TokenService {
    /// Creates a new token service.
    ///
    /// Refuses an empty or placeholder signing secret.
    pub fn new(config: JwtConfig) -> Result<Self, DomainError> {
        if config.secret.trim().is_empty() || config.is_using_default_secret() {
            return Err(DomainError::Internal {
                message: "JWT signing secret must be configured and non-default".to_string(),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a signed token embedding the account's identity
    pub fn issue(&self, account: &Account) -> Result<String, DomainError> {
        let claims = Claims::new(account, self.config.token_expiry_minutes);
        let header = Header::new(Algorithm::HS256);
        encode(&header, &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Validates a token and returns its claims.
    ///
    /// Pure function of the token and the current time; a deleted account
    /// is not rejected here, only a bad token is.
    pub fn validate(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                let kind = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::MalformedToken,
                };
                DomainError::Token(kind)
            })?;

        Ok(token_data.claims)
    }

    /// Token lifetime in seconds, the value callers surface as `expires_in`
    pub fn expires_in_seconds(&self) -> i64 {
        self.config.token_expiry_minutes * 60
    }
}

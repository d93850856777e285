use std::fmt;

use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;

use super::errors::TokenError;

/// Symmetric key material shared by the issuer and the validator.
///
/// Loaded once at startup and never mutated afterwards. Uses HS256
/// (HMAC with SHA-256).
pub struct JwtKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtKeys {
    /// HS256 keys shorter than the hash output weaken the MAC.
    pub const MIN_SECRET_LENGTH: usize = 32;

    /// Build key material from a shared secret.
    ///
    /// # Arguments
    /// * `secret` - Secret bytes, at least `MIN_SECRET_LENGTH` long
    ///
    /// # Errors
    /// * `SigningError` - Secret is empty or too short
    pub fn from_secret(secret: &[u8]) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::SigningError(
                "JWT secret is not configured".to_string(),
            ));
        }

        if secret.len() < Self::MIN_SECRET_LENGTH {
            return Err(TokenError::SigningError(format!(
                "JWT secret must be at least {} bytes, got {}",
                Self::MIN_SECRET_LENGTH,
                secret.len()
            )));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

impl fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtKeys")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

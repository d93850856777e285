use std::sync::Arc;

use jsonwebtoken::decode;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;
use super::keys::JwtKeys;
use crate::clock::Clock;

/// Verifies token signatures and expiry.
///
/// Pure verification: no state is kept between calls.
pub struct TokenValidator {
    keys: Arc<JwtKeys>,
    clock: Arc<dyn Clock>,
    validation: Validation,
}

impl TokenValidator {
    pub fn new(keys: Arc<JwtKeys>, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(keys.algorithm());
        // Expiry is checked against the injected clock, without leeway.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "exp"]);

        Self {
            keys,
            clock,
            validation,
        }
    }

    /// Validate a token and return its subject.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be parsed or lacks required claims
    /// * `InvalidSignature` - Signature does not match the server key
    /// * `Expired` - Current time is at or past `exp`
    pub fn validate(&self, token: &str) -> Result<String, TokenError> {
        self.decode_claims(token).map(|claims| claims.sub)
    }

    /// Validate a token and return all of its claims.
    ///
    /// The signature is verified before expiry, so a tampered token reports
    /// `InvalidSignature` even when it is also expired.
    pub fn decode_claims(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, self.keys.decoding_key(), &self.validation)?;
        let claims = token_data.claims;

        if claims.is_expired(self.clock.now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

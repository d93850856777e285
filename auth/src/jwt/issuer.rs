use std::sync::Arc;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::TokenError;
use super::keys::JwtKeys;
use crate::clock::Clock;
use crate::principal::Principal;

/// A signed access token together with its registered claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Compact JWS string, sent as `Authorization: Bearer <token>`
    pub token: String,
    pub subject: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Creates signed, time-bound tokens for principals.
pub struct TokenIssuer {
    keys: Arc<JwtKeys>,
    lifetime: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    /// Create a token issuer.
    ///
    /// # Arguments
    /// * `keys` - Shared signing key material
    /// * `lifetime` - How long issued tokens stay valid
    /// * `clock` - Time source for `iat`/`exp`
    ///
    /// # Errors
    /// * `SigningError` - Lifetime is not positive
    pub fn new(
        keys: Arc<JwtKeys>,
        lifetime: Duration,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, TokenError> {
        if lifetime <= Duration::zero() {
            return Err(TokenError::SigningError(format!(
                "Token lifetime must be positive, got {}s",
                lifetime.num_seconds()
            )));
        }

        Ok(Self {
            keys,
            lifetime,
            clock,
        })
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Issue a token whose subject is the principal's identifier.
    ///
    /// # Errors
    /// * `SigningError` - Expiry out of range or token encoding failed
    pub fn issue(&self, principal: &Principal) -> Result<IssuedToken, TokenError> {
        let claims = Claims::for_principal(principal, self.clock.now(), self.lifetime)?;
        let header = Header::new(self.keys.algorithm());

        let token = encode(&header, &claims, self.keys.encoding_key())
            .map_err(|e| TokenError::SigningError(e.to_string()))?;

        Ok(IssuedToken {
            token,
            issued_at: claims.issued_at(),
            expires_at: claims.expires_at(),
            subject: claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::principal::Role;

    fn keys() -> Arc<JwtKeys> {
        Arc::new(JwtKeys::from_secret(b"my_secret_key_at_least_32_bytes_long!").unwrap())
    }

    #[test]
    fn test_issue_sets_subject_and_expiry() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let clock = Arc::new(ManualClock::new(now));
        let issuer = TokenIssuer::new(keys(), Duration::hours(1), clock).unwrap();
        let principal = Principal::new("alice@example.com", Role::User, "$argon2id$stub");

        let issued = issuer.issue(&principal).expect("Failed to issue token");

        assert_eq!(issued.subject, "alice@example.com");
        assert_eq!(issued.issued_at, now);
        assert_eq!(issued.expires_at, now + Duration::hours(1));
        assert_eq!(issued.token.split('.').count(), 3);
    }

    #[test]
    fn test_non_positive_lifetime_is_rejected() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let result = TokenIssuer::new(keys(), Duration::zero(), clock);
        assert!(matches!(result, Err(TokenError::SigningError(_))));
    }
}

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::TokenError;
use crate::principal::Principal;
use crate::principal::Role;

/// Claims carried by an access token.
///
/// `sub`, `iat` and `exp` are the RFC 7519 registered claims; timestamps are
/// Unix seconds. `role` is informational: authorization decisions re-read the
/// role from the principal store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (principal identifier)
    pub sub: String,

    /// Issued at
    pub iat: i64,

    /// Expiration time
    pub exp: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl Claims {
    /// Build claims for a principal, valid for `lifetime` starting at `issued_at`.
    ///
    /// # Errors
    /// * `SigningError` - Expiry falls outside the representable date range
    pub fn for_principal(
        principal: &Principal,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Result<Self, TokenError> {
        let expires_at = issued_at.checked_add_signed(lifetime).ok_or_else(|| {
            TokenError::SigningError(format!("token lifetime {} overflows expiry", lifetime))
        })?;

        Ok(Self {
            sub: principal.identifier.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            role: Some(principal.role),
        })
    }

    /// A token is expired from the instant `now` reaches `exp`.
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.exp
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.iat, 0).unwrap_or_default()
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_default()
    }
}

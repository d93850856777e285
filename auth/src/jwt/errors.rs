use jsonwebtoken::errors::Error as JsonWebTokenError;
use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

/// Error type for token issuance and validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Key material is missing or unusable, or encoding failed.
    #[error("Failed to sign token: {0}")]
    SigningError(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}

impl From<JsonWebTokenError> for TokenError {
    fn from(err: JsonWebTokenError) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed(err.to_string()),
        }
    }
}

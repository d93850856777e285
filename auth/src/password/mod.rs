pub mod argon2;

pub use self::argon2::PasswordHasher;
use thiserror::Error;

/// Error type for password operations.
///
/// An empty password is not an error: hashing it yields `None`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}

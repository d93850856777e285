//! Authentication core
//!
//! Reusable credential verification for the registry service:
//! - Password hashing (Argon2id)
//! - Access token issuance and validation (JWT, HS256)
//! - Authentication gate for login and bearer-token requests
//!
//! Key material is loaded once and shared read-only between the issuer and
//! the validator. Principals are looked up through the [`PrincipalStore`]
//! port, which the owning service implements.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap().unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert_eq!(hasher.hash("").unwrap(), None);
//! ```
//!
//! ## Tokens
//! ```
//! use std::sync::Arc;
//!
//! use auth::{JwtKeys, Principal, Role, SystemClock, TokenIssuer, TokenValidator};
//! use chrono::Duration;
//!
//! let keys = Arc::new(JwtKeys::from_secret(b"secret_key_at_least_32_bytes_long!").unwrap());
//! let clock = Arc::new(SystemClock);
//! let issuer = TokenIssuer::new(keys.clone(), Duration::hours(1), clock.clone()).unwrap();
//! let validator = TokenValidator::new(keys, clock);
//!
//! let alice = Principal::new("alice@example.com", Role::User, "$argon2id$...");
//! let issued = issuer.issue(&alice).unwrap();
//! assert_eq!(validator.validate(&issued.token).unwrap(), "alice@example.com");
//! ```

pub mod authenticator;
pub mod clock;
pub mod jwt;
pub mod password;
pub mod principal;

pub use authenticator::extract_bearer_token;
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::PrincipalStore;
pub use authenticator::PrincipalStoreError;
pub use clock::Clock;
pub use clock::ManualClock;
pub use clock::SystemClock;
pub use jwt::Claims;
pub use jwt::IssuedToken;
pub use jwt::JwtKeys;
pub use jwt::TokenError;
pub use jwt::TokenIssuer;
pub use jwt::TokenValidator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use principal::Principal;
pub use principal::Role;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::jwt::IssuedToken;
use crate::jwt::TokenError;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenValidator;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::principal::Principal;

const BEARER_PREFIX: &str = "Bearer ";

/// Failure of the backing principal store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Principal lookup failed: {0}")]
pub struct PrincipalStoreError(pub String);

/// Lookup of principals by their login identifier.
///
/// Implemented by the service that owns the identity records.
#[async_trait]
pub trait PrincipalStore: Send + Sync + 'static {
    /// Find the principal registered under `identifier`.
    ///
    /// # Returns
    /// Optional principal (None if no such identifier is registered)
    ///
    /// # Errors
    /// * `PrincipalStoreError` - Backing store failed
    async fn find_principal_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Principal>, PrincipalStoreError>;
}

/// Authentication operation errors.
///
/// Every variant except `Token(SigningError)`, `Password` and `Store` is a
/// client failure and must reach the caller as one indistinct rejection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Store(#[from] PrincipalStoreError),
}

impl AuthenticationError {
    /// Whether the failure is a server-side problem rather than a rejected caller.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            AuthenticationError::Token(TokenError::SigningError(_))
                | AuthenticationError::Password(PasswordError::HashingFailed(_))
                | AuthenticationError::Store(_)
        )
    }
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    pub principal: Principal,
    pub token: IssuedToken,
}

/// Authentication gate combining password verification and token handling.
///
/// Collaborators are injected by the caller; the gate itself holds no
/// mutable state and can be shared across requests.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_validator: TokenValidator,
    principal_store: Arc<dyn PrincipalStore>,
    decoy_hash: String,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `password_hasher` - Hasher used to check submitted passwords
    /// * `token_issuer` - Issuer for login and refresh tokens
    /// * `token_validator` - Validator for bearer tokens
    /// * `principal_store` - Lookup of principals by identifier
    ///
    /// # Errors
    /// * `PasswordError` - Decoy hash could not be computed
    pub fn new(
        password_hasher: PasswordHasher,
        token_issuer: TokenIssuer,
        token_validator: TokenValidator,
        principal_store: Arc<dyn PrincipalStore>,
    ) -> Result<Self, AuthenticationError> {
        // Verified against when the identifier is unknown, so both login
        // failures cost one hash verification.
        let decoy_hash = password_hasher
            .hash("decoy-password-for-unknown-principals")?
            .ok_or_else(|| PasswordError::HashingFailed("empty decoy password".to_string()))?;

        Ok(Self {
            password_hasher,
            token_issuer,
            token_validator,
            principal_store,
            decoy_hash,
        })
    }

    /// Verify credentials and issue a token.
    ///
    /// Unknown identifier and wrong password both fail with
    /// `InvalidCredentials`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown identifier or password mismatch
    /// * `Store` - Principal lookup failed
    /// * `Token` - Token signing failed
    pub async fn login(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let principal = self
            .principal_store
            .find_principal_by_identifier(identifier)
            .await?;

        let Some(principal) = principal else {
            let _ = self.password_hasher.verify(password, &self.decoy_hash);
            tracing::debug!("Login rejected: unknown identifier");
            return Err(AuthenticationError::InvalidCredentials);
        };

        let matches = self
            .password_hasher
            .verify(password, &principal.password_hash)
            .unwrap_or_else(|e| {
                tracing::error!(
                    identifier = %principal.identifier,
                    error = %e,
                    "Stored password hash is unreadable"
                );
                false
            });

        if !matches {
            tracing::debug!("Login rejected: password mismatch");
            return Err(AuthenticationError::InvalidCredentials);
        }

        let token = self.token_issuer.issue(&principal)?;

        Ok(AuthenticationResult { principal, token })
    }

    /// Authenticate a request from its raw `Authorization` header value.
    ///
    /// # Errors
    /// * `MissingToken` - Header absent or not using the Bearer scheme
    /// * `Token` - Token invalid, expired or malformed
    /// * `InvalidCredentials` - Token subject is no longer registered
    /// * `Store` - Principal lookup failed
    pub async fn authenticate_header(
        &self,
        authorization: Option<&str>,
    ) -> Result<Principal, AuthenticationError> {
        let token = authorization
            .and_then(extract_bearer_token)
            .ok_or(AuthenticationError::MissingToken)?;

        self.authenticate_token(token).await
    }

    /// Validate a bearer token and resolve its principal from the store.
    pub async fn authenticate_token(&self, token: &str) -> Result<Principal, AuthenticationError> {
        let identifier = self.token_validator.validate(token)?;

        self.principal_store
            .find_principal_by_identifier(&identifier)
            .await?
            .ok_or(AuthenticationError::InvalidCredentials)
    }

    /// Issue a fresh token for an already authenticated principal.
    pub fn refresh(&self, principal: &Principal) -> Result<IssuedToken, AuthenticationError> {
        Ok(self.token_issuer.issue(principal)?)
    }
}

/// Extract the token from a `Bearer <token>` header value.
///
/// Returns `None` for other schemes or an empty token.
pub fn extract_bearer_token(authorization: &str) -> Option<&str> {
    authorization
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

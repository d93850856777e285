pub mod claims;
pub mod errors;
pub mod issuer;
pub mod keys;
pub mod validator;

pub use claims::Claims;
pub use errors::TokenError;
pub use issuer::IssuedToken;
pub use issuer::TokenIssuer;
pub use keys::JwtKeys;
pub use validator::TokenValidator;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Authorization profile attached to a principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Admin => "ROLE_ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown role: {0}")]
pub struct UnknownRoleError(pub String);

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROLE_USER" => Ok(Role::User),
            "ROLE_ADMIN" => Ok(Role::Admin),
            other => Err(UnknownRoleError(other.to_string())),
        }
    }
}

/// Identity of an actor that can authenticate.
///
/// The identifier is the login email. `password_hash` is a PHC string and
/// never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub identifier: String,
    pub role: Role,
    pub password_hash: String,
}

impl Principal {
    pub fn new(identifier: impl Into<String>, role: Role, password_hash: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            role,
            password_hash: password_hash.into(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        assert_eq!("ROLE_ADMIN".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("ROLE_USER".parse::<Role>(), Ok(Role::User));
        assert_eq!(Role::Admin.to_string(), "ROLE_ADMIN");
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = "ROLE_ROOT".parse::<Role>();
        assert_eq!(result, Err(UnknownRoleError("ROLE_ROOT".to_string())));
    }

    #[test]
    fn test_role_serializes_with_prefix() {
        let json = serde_json::to_string(&Role::User).unwrap();
        assert_eq!(json, "\"ROLE_USER\"");
    }
}

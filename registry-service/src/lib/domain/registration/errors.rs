use thiserror::Error;

use crate::domain::company::errors::CompanyError;
use crate::domain::employee::errors::EmployeeError;

/// A single reason a registration was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationViolation {
    #[error("Company not registered: {0}")]
    CompanyNotRegistered(String),

    #[error("Company already registered: {0}")]
    CompanyAlreadyRegistered(String),

    #[error("CPF already registered: {0}")]
    CpfAlreadyRegistered(String),

    #[error("Email already registered: {0}")]
    EmailAlreadyRegistered(String),

    #[error("Password must not be empty")]
    PasswordRequired,
}

/// Top-level error for registration operations
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Every violation found, not just the first.
    #[error("Registration rejected: {}", join_violations(.0))]
    Rejected(Vec<RegistrationViolation>),

    #[error(transparent)]
    Company(#[from] CompanyError),

    #[error(transparent)]
    Employee(#[from] EmployeeError),
}

fn join_violations(violations: &[RegistrationViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_lists_all_violations() {
        let err = RegistrationError::Rejected(vec![
            RegistrationViolation::CpfAlreadyRegistered("52998224725".to_string()),
            RegistrationViolation::PasswordRequired,
        ]);

        assert_eq!(
            err.to_string(),
            "Registration rejected: CPF already registered: 52998224725; Password must not be empty"
        );
    }
}

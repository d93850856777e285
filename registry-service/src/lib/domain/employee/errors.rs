use thiserror::Error;

use crate::domain::values::DocumentError;
use crate::domain::values::EmailError;
use crate::domain::values::NameError;

/// Error for EmployeeId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmployeeIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for HourlyRate validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HourlyRateError {
    #[error("Hourly rate must be a decimal number like 42.50, got '{0}'")]
    InvalidFormat(String),

    #[error("Hourly rate accepts at most 2 decimal places")]
    TooManyDecimals,

    #[error("Hourly rate must be positive")]
    NotPositive,
}

/// Error for WorkHours validation failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorkHoursError {
    #[error("Hours must be greater than 0 and at most 24, got {0}")]
    OutOfRange(f32),
}

/// Top-level error for all employee-related operations
#[derive(Debug, Clone, Error)]
pub enum EmployeeError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid employee ID: {0}")]
    InvalidEmployeeId(#[from] EmployeeIdError),

    #[error("Invalid name: {0}")]
    InvalidName(#[from] NameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid CPF: {0}")]
    InvalidCpf(#[from] DocumentError),

    #[error("Invalid hourly rate: {0}")]
    InvalidHourlyRate(#[from] HourlyRateError),

    #[error("Invalid work hours: {0}")]
    InvalidWorkHours(#[from] WorkHoursError),

    #[error("Password must not be empty")]
    PasswordRequired,

    // Domain-level errors
    #[error("Employee not found: {0}")]
    NotFound(String),

    #[error("CPF already registered: {0}")]
    CpfAlreadyExists(String),

    #[error("Email already registered: {0}")]
    EmailAlreadyExists(String),

    #[error("Not allowed to modify employee {0}")]
    Forbidden(String),

    // Infrastructure errors
    #[error("Password hashing failed: {0}")]
    PasswordHashing(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

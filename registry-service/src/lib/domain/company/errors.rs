use thiserror::Error;

use crate::domain::values::DocumentError;
use crate::domain::values::NameError;

/// Top-level error for all company-related operations
#[derive(Debug, Clone, Error)]
pub enum CompanyError {
    // Value object validation errors
    #[error("Invalid CNPJ: {0}")]
    InvalidCnpj(#[from] DocumentError),

    #[error("Invalid corporate name: {0}")]
    InvalidCorporateName(#[from] NameError),

    // Domain-level errors
    #[error("Company not found: {0}")]
    NotFound(String),

    #[error("Company not found for CNPJ: {0}")]
    NotFoundByCnpj(String),

    #[error("CNPJ already registered: {0}")]
    CnpjAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

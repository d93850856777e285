use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error for CPF/CNPJ validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Document contains invalid characters (only digits, '.', '/' and '-' allowed)")]
    InvalidCharacters,

    #[error("Document must have {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("Document check digits do not match")]
    CheckDigitMismatch,
}

/// Error for name validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Name too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Strip formatting and verify the two trailing mod-11 check digits.
///
/// `weights` holds the weights of the first and second check digit; their
/// lengths are the number of digits each one covers.
fn parse_document(raw: &str, length: usize, weights: [&[u32]; 2]) -> Result<String, DocumentError> {
    let mut digits = Vec::with_capacity(length);
    for c in raw.trim().chars() {
        match c {
            '0'..='9' => digits.push(c.to_digit(10).unwrap_or_default()),
            '.' | '/' | '-' => {}
            _ => return Err(DocumentError::InvalidCharacters),
        }
    }

    if digits.len() != length {
        return Err(DocumentError::WrongLength {
            expected: length,
            actual: digits.len(),
        });
    }

    // Sequences like 000.000.000-00 pass the checksum but are never issued.
    if digits.iter().all(|d| *d == digits[0]) {
        return Err(DocumentError::CheckDigitMismatch);
    }

    for (position, weights) in weights.iter().enumerate() {
        let covered = length - 2 + position;
        let sum: u32 = digits[..covered]
            .iter()
            .zip(weights.iter())
            .map(|(d, w)| d * w)
            .sum();
        let remainder = sum % 11;
        let expected = if remainder < 2 { 0 } else { 11 - remainder };

        if digits[covered] != expected {
            return Err(DocumentError::CheckDigitMismatch);
        }
    }

    Ok(digits
        .into_iter()
        .filter_map(|d| char::from_digit(d, 10))
        .collect())
}

/// Brazilian company registry number (CNPJ), stored as 14 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnpj(String);

impl Cnpj {
    const LENGTH: usize = 14;
    const WEIGHTS: [&'static [u32]; 2] = [
        &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
        &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    ];

    /// Parse a CNPJ, with or without `00.000.000/0000-00` punctuation.
    ///
    /// # Errors
    /// * `InvalidCharacters` - Contains anything but digits and punctuation
    /// * `WrongLength` - Not exactly 14 digits
    /// * `CheckDigitMismatch` - Check digits are wrong
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DocumentError> {
        parse_document(raw.as_ref(), Self::LENGTH, Self::WEIGHTS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Brazilian individual taxpayer number (CPF), stored as 11 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    const LENGTH: usize = 11;
    const WEIGHTS: [&'static [u32]; 2] = [
        &[10, 9, 8, 7, 6, 5, 4, 3, 2],
        &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2],
    ];

    /// Parse a CPF, with or without `000.000.000-00` punctuation.
    ///
    /// # Errors
    /// * `InvalidCharacters` - Contains anything but digits and punctuation
    /// * `WrongLength` - Not exactly 11 digits
    /// * `CheckDigitMismatch` - Check digits are wrong
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DocumentError> {
        parse_document(raw.as_ref(), Self::LENGTH, Self::WEIGHTS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

fn validated_name(raw: String, min: usize, max: usize) -> Result<String, NameError> {
    let name = raw.trim().to_string();
    let length = name.chars().count();

    if length < min {
        Err(NameError::TooShort {
            min,
            actual: length,
        })
    } else if length > max {
        Err(NameError::TooLong {
            max,
            actual: length,
        })
    } else {
        Ok(name)
    }
}

/// Employee full name, 3-200 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 200;

    pub fn new(name: String) -> Result<Self, NameError> {
        validated_name(name, Self::MIN_LENGTH, Self::MAX_LENGTH).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Registered company name (razão social), 5-200 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorporateName(String);

impl CorporateName {
    const MIN_LENGTH: usize = 5;
    const MAX_LENGTH: usize = 200;

    pub fn new(name: String) -> Result<Self, NameError> {
        validated_name(name, Self::MIN_LENGTH, Self::MAX_LENGTH).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Doubles as the
/// login identifier of an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address, trimmed and lowercased.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = Self::normalize(&email);
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Canonical form used for storage and lookups.
    pub fn normalize(email: &str) -> String {
        email.trim().to_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

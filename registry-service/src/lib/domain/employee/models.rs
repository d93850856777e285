use std::fmt;

use auth::Principal;
use auth::Role;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::company::models::CompanyId;
use crate::domain::employee::errors::EmployeeIdError;
use crate::domain::employee::errors::HourlyRateError;
use crate::domain::employee::errors::WorkHoursError;
use crate::domain::values::Cpf;
use crate::domain::values::EmailAddress;
use crate::domain::values::PersonName;

/// Employee aggregate entity.
///
/// An employee is also the authenticating principal: `email` is the login
/// identifier and `role` its authorization profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub company_id: CompanyId,
    pub name: PersonName,
    pub email: EmailAddress,
    pub cpf: Cpf,
    pub password_hash: String,
    pub role: Role,
    pub hourly_rate: Option<HourlyRate>,
    pub daily_work_hours: Option<WorkHours>,
    pub lunch_hours: Option<WorkHours>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Identity of this employee as seen by the authentication gate.
    pub fn principal(&self) -> Principal {
        Principal::new(self.email.as_str(), self.role, self.password_hash.as_str())
    }
}

/// Employee unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmployeeId(pub Uuid);

impl EmployeeId {
    /// Generate a new random employee ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an employee ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, EmployeeIdError> {
        Uuid::parse_str(s)
            .map(EmployeeId)
            .map_err(|e| EmployeeIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Hourly pay rate, held in cents to keep decimal amounts exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HourlyRate {
    cents: i64,
}

impl HourlyRate {
    const MAX_DECIMALS: usize = 2;

    /// Parse a decimal amount such as `42`, `42.5` or `42.50`.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not a plain non-negative decimal number
    /// * `TooManyDecimals` - More than two fractional digits
    /// * `NotPositive` - Amount is zero
    pub fn parse(raw: &str) -> Result<Self, HourlyRateError> {
        let raw = raw.trim();
        let invalid = || HourlyRateError::InvalidFormat(raw.to_string());

        let (units, fraction) = raw.split_once('.').unwrap_or((raw, ""));
        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if units.is_empty() || !all_digits(units) || !all_digits(fraction) {
            return Err(invalid());
        }
        if fraction.len() > Self::MAX_DECIMALS {
            return Err(HourlyRateError::TooManyDecimals);
        }

        let units: i64 = units.parse().map_err(|_| invalid())?;
        let fraction: i64 = format!("{:0<2}", fraction).parse().map_err(|_| invalid())?;
        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .ok_or_else(invalid)?;

        Self::from_cents(cents)
    }

    /// # Errors
    /// * `NotPositive` - Amount is zero or negative
    pub fn from_cents(cents: i64) -> Result<Self, HourlyRateError> {
        if cents <= 0 {
            return Err(HourlyRateError::NotPositive);
        }
        Ok(Self { cents })
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }
}

impl fmt::Display for HourlyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// A number of hours within one day.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct WorkHours(f32);

impl WorkHours {
    const MAX: f32 = 24.0;

    /// # Errors
    /// * `OutOfRange` - Not finite, not positive, or above 24
    pub fn new(hours: f32) -> Result<Self, WorkHoursError> {
        if hours.is_finite() && hours > 0.0 && hours <= Self::MAX {
            Ok(Self(hours))
        } else {
            Err(WorkHoursError::OutOfRange(hours))
        }
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

/// Command to update an existing employee with optional validated fields.
///
/// Only provided fields are updated. The email is the login identifier and
/// cannot be changed.
#[derive(Debug, Default)]
pub struct UpdateEmployeeCommand {
    pub name: Option<PersonName>,
    pub password: Option<String>,
    pub hourly_rate: Option<HourlyRate>,
    pub daily_work_hours: Option<WorkHours>,
    pub lunch_hours: Option<WorkHours>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_rate_parse() {
        assert_eq!(HourlyRate::parse("42").unwrap().cents(), 4200);
        assert_eq!(HourlyRate::parse("42.5").unwrap().cents(), 4250);
        assert_eq!(HourlyRate::parse(" 0.07 ").unwrap().cents(), 7);
        assert_eq!(HourlyRate::parse("42.50").unwrap().to_string(), "42.50");
    }

    #[test]
    fn test_hourly_rate_rejects_bad_input() {
        assert_eq!(
            HourlyRate::parse("42.505"),
            Err(HourlyRateError::TooManyDecimals)
        );
        assert_eq!(HourlyRate::parse("0.00"), Err(HourlyRateError::NotPositive));
        assert!(matches!(
            HourlyRate::parse("-3"),
            Err(HourlyRateError::InvalidFormat(_))
        ));
        assert!(matches!(
            HourlyRate::parse("1e3"),
            Err(HourlyRateError::InvalidFormat(_))
        ));
        assert!(matches!(
            HourlyRate::parse(".5"),
            Err(HourlyRateError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_work_hours_bounds() {
        assert!(WorkHours::new(8.0).is_ok());
        assert!(WorkHours::new(24.0).is_ok());
        assert!(WorkHours::new(0.0).is_err());
        assert!(WorkHours::new(24.5).is_err());
        assert!(WorkHours::new(f32::NAN).is_err());
    }

    #[test]
    fn test_employee_id_from_string() {
        let id = EmployeeId::new();
        assert_eq!(EmployeeId::from_string(&id.to_string()), Ok(id));
        assert!(EmployeeId::from_string("not-a-uuid").is_err());
    }
}

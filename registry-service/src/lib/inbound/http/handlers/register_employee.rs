use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::CompanyData;
use super::EmployeeData;
use crate::domain::employee::errors::HourlyRateError;
use crate::domain::employee::errors::WorkHoursError;
use crate::domain::employee::models::HourlyRate;
use crate::domain::employee::models::WorkHours;
use crate::domain::registration::models::EmployeeRegistration;
use crate::domain::registration::models::NewEmployee;
use crate::domain::registration::models::RegisterEmployeeCommand;
use crate::domain::registration::ports::RegistrationServicePort;
use crate::domain::values::Cnpj;
use crate::domain::values::Cpf;
use crate::domain::values::DocumentError;
use crate::domain::values::EmailAddress;
use crate::domain::values::EmailError;
use crate::domain::values::NameError;
use crate::domain::values::PersonName;
use crate::inbound::http::router::AppState;

pub async fn register_employee(
    State(state): State<AppState>,
    Json(body): Json<RegisterEmployeeRequest>,
) -> Result<ApiSuccess<RegisterEmployeeResponseData>, ApiError> {
    state
        .registration_service
        .register_employee(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref registration| ApiSuccess::new(StatusCode::CREATED, registration.into()))
}

/// HTTP request body for registering an employee (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegisterEmployeeRequest {
    cnpj: String,
    name: String,
    email: String,
    cpf: String,
    password: String,
    hourly_rate: Option<String>,
    daily_work_hours: Option<f32>,
    lunch_hours: Option<f32>,
}

#[derive(Debug, Clone, Error)]
pub(super) enum ParseRegistrationRequestError {
    #[error("Invalid CNPJ: {0}")]
    Cnpj(DocumentError),

    #[error("Invalid CPF: {0}")]
    Cpf(DocumentError),

    #[error("Invalid name: {0}")]
    Name(#[from] NameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid hourly rate: {0}")]
    HourlyRate(#[from] HourlyRateError),

    #[error("Invalid work hours: {0}")]
    WorkHours(#[from] WorkHoursError),
}

impl From<ParseRegistrationRequestError> for ApiError {
    fn from(err: ParseRegistrationRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

/// Parse the person part shared by both registration requests.
pub(super) fn parse_new_employee(
    name: String,
    email: String,
    cpf: &str,
    password: String,
) -> Result<NewEmployee, ParseRegistrationRequestError> {
    Ok(NewEmployee {
        name: PersonName::new(name)?,
        email: EmailAddress::new(email)?,
        cpf: Cpf::new(cpf).map_err(ParseRegistrationRequestError::Cpf)?,
        password,
    })
}

pub(super) fn parse_cnpj(cnpj: &str) -> Result<Cnpj, ParseRegistrationRequestError> {
    Cnpj::new(cnpj).map_err(ParseRegistrationRequestError::Cnpj)
}

impl RegisterEmployeeRequest {
    fn try_into_command(self) -> Result<RegisterEmployeeCommand, ParseRegistrationRequestError> {
        let cnpj = parse_cnpj(&self.cnpj)?;
        let employee = parse_new_employee(self.name, self.email, &self.cpf, self.password)?;
        let hourly_rate = self
            .hourly_rate
            .as_deref()
            .map(HourlyRate::parse)
            .transpose()?;
        let daily_work_hours = self.daily_work_hours.map(WorkHours::new).transpose()?;
        let lunch_hours = self.lunch_hours.map(WorkHours::new).transpose()?;

        Ok(RegisterEmployeeCommand {
            cnpj,
            employee,
            hourly_rate,
            daily_work_hours,
            lunch_hours,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterEmployeeResponseData {
    pub company: CompanyData,
    pub employee: EmployeeData,
}

impl From<&EmployeeRegistration> for RegisterEmployeeResponseData {
    fn from(registration: &EmployeeRegistration) -> Self {
        Self {
            company: (&registration.company).into(),
            employee: (&registration.employee).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterEmployeeRequest {
        RegisterEmployeeRequest {
            cnpj: "11.222.333/0001-81".to_string(),
            name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            cpf: "529.982.247-25".to_string(),
            password: "secret-password".to_string(),
            hourly_rate: Some("42.50".to_string()),
            daily_work_hours: Some(8.0),
            lunch_hours: Some(1.0),
        }
    }

    #[test]
    fn test_request_parses_into_command() {
        let command = request().try_into_command().unwrap();

        assert_eq!(command.cnpj.as_str(), "11222333000181");
        assert_eq!(command.employee.cpf.as_str(), "52998224725");
        assert_eq!(command.hourly_rate.map(|r| r.cents()), Some(4250));
        assert_eq!(command.daily_work_hours.map(|h| h.value()), Some(8.0));
    }

    #[test]
    fn test_invalid_cpf_is_reported_as_cpf() {
        let mut body = request();
        body.cpf = "529.982.247-24".to_string();

        let err = body.try_into_command().unwrap_err();
        assert!(matches!(err, ParseRegistrationRequestError::Cpf(_)));
    }

    #[test]
    fn test_invalid_hours_are_rejected() {
        let mut body = request();
        body.daily_work_hours = Some(25.0);

        let err = body.try_into_command().unwrap_err();
        assert!(matches!(err, ParseRegistrationRequestError::WorkHours(_)));
    }
}

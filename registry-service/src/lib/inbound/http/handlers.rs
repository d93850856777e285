use auth::AuthenticationError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::company::errors::CompanyError;
use crate::domain::company::models::Company;
use crate::domain::employee::models::Employee;
use crate::employee::errors::EmployeeError;
use crate::registration::errors::RegistrationError;

pub mod delete_employee;
pub mod get_company;
pub mod get_employee;
pub mod login;
pub mod refresh_token;
pub mod register_company;
pub mod register_employee;
pub mod update_employee;

/// Body returned for every authentication failure, whatever the cause.
pub const AUTHENTICATION_FAILED: &str = "Authentication failed";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    /// Registration refused; carries one message per violation.
    Rejected(Vec<String>),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            ApiError::InternalServerError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg, Vec::new())
            }
            ApiError::UnprocessableEntity(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg, Vec::new())
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, Vec::new()),
            ApiError::Rejected(errors) => (
                StatusCode::BAD_REQUEST,
                "Registration rejected".to_string(),
                errors,
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, Vec::new()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg, Vec::new()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, Vec::new()),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg, Vec::new()),
        };

        (
            status,
            Json(ApiResponseBody::new_error(status, message, errors)),
        )
            .into_response()
    }
}

impl From<CompanyError> for ApiError {
    fn from(err: CompanyError) -> Self {
        match err {
            CompanyError::NotFound(_) | CompanyError::NotFoundByCnpj(_) => {
                ApiError::NotFound(err.to_string())
            }
            CompanyError::CnpjAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            CompanyError::InvalidCnpj(_) | CompanyError::InvalidCorporateName(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            CompanyError::DatabaseError(_) => {
                tracing::error!(error = %err, "Company operation failed");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<EmployeeError> for ApiError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::NotFound(_) => ApiError::NotFound(err.to_string()),
            EmployeeError::CpfAlreadyExists(_) | EmployeeError::EmailAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            EmployeeError::Forbidden(_) => ApiError::Forbidden(err.to_string()),
            EmployeeError::InvalidEmployeeId(_) => ApiError::BadRequest(err.to_string()),
            EmployeeError::InvalidName(_)
            | EmployeeError::InvalidEmail(_)
            | EmployeeError::InvalidCpf(_)
            | EmployeeError::InvalidHourlyRate(_)
            | EmployeeError::InvalidWorkHours(_)
            | EmployeeError::PasswordRequired => ApiError::UnprocessableEntity(err.to_string()),
            EmployeeError::PasswordHashing(_) | EmployeeError::DatabaseError(_) => {
                tracing::error!(error = %err, "Employee operation failed");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::Rejected(violations) => {
                ApiError::Rejected(violations.iter().map(ToString::to_string).collect())
            }
            RegistrationError::Company(e) => e.into(),
            RegistrationError::Employee(e) => e.into(),
        }
    }
}

impl From<AuthenticationError> for ApiError {
    fn from(err: AuthenticationError) -> Self {
        if err.is_server_error() {
            tracing::error!(error = %err, "Authentication could not be performed");
            return ApiError::InternalServerError("Internal server error".to_string());
        }

        tracing::warn!(reason = %err, "Authentication rejected");
        ApiError::Unauthorized(AUTHENTICATION_FAILED.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String, errors: Vec<String>) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message, errors },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Employee as exposed over HTTP; the password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeData {
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub role: String,
    pub hourly_rate: Option<String>,
    pub daily_work_hours: Option<f32>,
    pub lunch_hours: Option<f32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Employee> for EmployeeData {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            company_id: employee.company_id.to_string(),
            name: employee.name.as_str().to_string(),
            email: employee.email.as_str().to_string(),
            cpf: employee.cpf.as_str().to_string(),
            role: employee.role.as_str().to_string(),
            hourly_rate: employee.hourly_rate.map(|rate| rate.to_string()),
            daily_work_hours: employee.daily_work_hours.map(|hours| hours.value()),
            lunch_hours: employee.lunch_hours.map(|hours| hours.value()),
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyData {
    pub id: String,
    pub cnpj: String,
    pub corporate_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Company> for CompanyData {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id.to_string(),
            cnpj: company.cnpj.as_str().to_string(),
            corporate_name: company.corporate_name.as_str().to_string(),
            created_at: company.created_at,
        }
    }
}

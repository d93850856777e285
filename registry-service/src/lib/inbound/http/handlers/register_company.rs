use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::register_employee::parse_cnpj;
use super::register_employee::parse_new_employee;
use super::register_employee::ParseRegistrationRequestError;
use super::ApiError;
use super::ApiSuccess;
use super::CompanyData;
use super::EmployeeData;
use crate::domain::registration::models::CompanyRegistration;
use crate::domain::registration::models::RegisterCompanyCommand;
use crate::domain::registration::ports::RegistrationServicePort;
use crate::domain::values::CorporateName;
use crate::inbound::http::router::AppState;

/// Register a company and its administrator in one request.
pub async fn register_company(
    State(state): State<AppState>,
    Json(body): Json<RegisterCompanyRequest>,
) -> Result<ApiSuccess<RegisterCompanyResponseData>, ApiError> {
    state
        .registration_service
        .register_company(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref registration| ApiSuccess::new(StatusCode::CREATED, registration.into()))
}

/// HTTP request body for registering a company (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterCompanyRequest {
    cnpj: String,
    corporate_name: String,
    name: String,
    email: String,
    cpf: String,
    password: String,
}

impl RegisterCompanyRequest {
    fn try_into_command(self) -> Result<RegisterCompanyCommand, ParseRegistrationRequestError> {
        Ok(RegisterCompanyCommand {
            cnpj: parse_cnpj(&self.cnpj)?,
            corporate_name: CorporateName::new(self.corporate_name)?,
            administrator: parse_new_employee(self.name, self.email, &self.cpf, self.password)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterCompanyResponseData {
    pub company: CompanyData,
    pub administrator: EmployeeData,
}

impl From<&CompanyRegistration> for RegisterCompanyResponseData {
    fn from(registration: &CompanyRegistration) -> Self {
        Self {
            company: (&registration.company).into(),
            administrator: (&registration.administrator).into(),
        }
    }
}

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::EmployeeData;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::HourlyRate;
use crate::domain::employee::models::UpdateEmployeeCommand;
use crate::domain::employee::models::WorkHours;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::domain::values::PersonName;
use crate::employee::errors::EmployeeError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedPrincipal;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating an employee (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub password: Option<String>,
    pub hourly_rate: Option<String>,
    pub daily_work_hours: Option<f32>,
    pub lunch_hours: Option<f32>,
}

impl UpdateEmployeeRequest {
    fn try_into_command(self) -> Result<UpdateEmployeeCommand, EmployeeError> {
        // Validation happens here - errors are automatically converted via #[from]
        let name = self.name.map(PersonName::new).transpose()?;
        let hourly_rate = self
            .hourly_rate
            .as_deref()
            .map(HourlyRate::parse)
            .transpose()?;
        let daily_work_hours = self.daily_work_hours.map(WorkHours::new).transpose()?;
        let lunch_hours = self.lunch_hours.map(WorkHours::new).transpose()?;

        Ok(UpdateEmployeeCommand {
            name,
            password: self.password,
            hourly_rate,
            daily_work_hours,
            lunch_hours,
        })
    }
}

pub async fn update_employee(
    State(state): State<AppState>,
    Extension(AuthenticatedPrincipal(principal)): Extension<AuthenticatedPrincipal>,
    Path(id): Path<String>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    let employee_id = EmployeeId::from_string(&id).map_err(EmployeeError::from)?;
    let command = req.try_into_command()?;

    state
        .employee_service
        .update_employee(&principal, &employee_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::OK, employee.into()))
}

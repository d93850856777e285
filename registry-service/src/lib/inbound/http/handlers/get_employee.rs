use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::EmployeeData;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    let employee_id =
        EmployeeId::from_string(&employee_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .employee_service
        .get_employee(&employee_id)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::OK, employee.into()))
}

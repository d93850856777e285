use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::employee::errors::EmployeeError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedPrincipal;
use crate::inbound::http::router::AppState;

/// Reachable by administrators only; the router guards this route and the
/// service confines it to the administrator's own company.
pub async fn delete_employee(
    State(state): State<AppState>,
    Extension(AuthenticatedPrincipal(principal)): Extension<AuthenticatedPrincipal>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let employee_id = EmployeeId::from_string(&id).map_err(EmployeeError::from)?;

    state
        .employee_service
        .delete_employee(&principal, &employee_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}

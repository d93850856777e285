use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::CompanyData;
use crate::company::errors::CompanyError;
use crate::domain::company::ports::CompanyServicePort;
use crate::domain::values::Cnpj;
use crate::inbound::http::router::AppState;

pub async fn get_company_by_cnpj(
    State(state): State<AppState>,
    Path(cnpj): Path<String>,
) -> Result<ApiSuccess<CompanyData>, ApiError> {
    let cnpj = Cnpj::new(&cnpj).map_err(CompanyError::from)?;

    state
        .company_service
        .get_company_by_cnpj(&cnpj)
        .await
        .map_err(ApiError::from)
        .map(|ref company| ApiSuccess::new(StatusCode::OK, company.into()))
}

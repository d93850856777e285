use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::login::TokenData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedPrincipal;
use crate::inbound::http::router::AppState;

/// Exchange a still valid token for one with a fresh lifetime.
pub async fn refresh_token(
    State(state): State<AppState>,
    Extension(AuthenticatedPrincipal(principal)): Extension<AuthenticatedPrincipal>,
) -> Result<ApiSuccess<TokenData>, ApiError> {
    let issued = state.authenticator.refresh(&principal)?;

    tracing::debug!(principal = %principal.identifier, "Token refreshed");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        TokenData::new(&principal, issued),
    ))
}

use auth::IssuedToken;
use auth::Principal;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<TokenData>, ApiError> {
    let result = state
        .authenticator
        .login(body.email.trim(), &body.password)
        .await?;

    tracing::info!(principal = %result.principal.identifier, "Login succeeded");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        TokenData::new(&result.principal, result.token),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

/// Token handed to a client after login or refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenData {
    pub token: String,
    pub token_type: &'static str,
    pub subject: String,
    pub role: String,
    pub expires_at: DateTime<Utc>,
}

impl TokenData {
    pub fn new(principal: &Principal, issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            token_type: "Bearer",
            subject: issued.subject,
            role: principal.role.as_str().to_string(),
            expires_at: issued.expires_at,
        }
    }
}

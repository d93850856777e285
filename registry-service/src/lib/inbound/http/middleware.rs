use auth::Principal;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use axum::Extension;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type holding the authenticated principal of a request
#[derive(Debug, Clone)]
pub struct AuthenticatedPrincipal(pub Principal);

/// Middleware that authenticates the bearer token and stores the principal
/// in request extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let principal = state
        .authenticator
        .authenticate_header(authorization.as_deref())
        .await?;

    tracing::debug!(
        principal = %principal.identifier,
        role = %principal.role,
        "Request authenticated"
    );

    req.extensions_mut()
        .insert(AuthenticatedPrincipal(principal));

    Ok(next.run(req).await)
}

/// Middleware that lets only administrators through. Must run after
/// [`authenticate`].
pub async fn require_admin(
    Extension(AuthenticatedPrincipal(principal)): Extension<AuthenticatedPrincipal>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !principal.is_admin() {
        tracing::warn!(
            principal = %principal.identifier,
            path = %req.uri().path(),
            "Administrator role required"
        );
        return Err(ApiError::Forbidden("Administrator role required".to_string()));
    }

    Ok(next.run(req).await)
}

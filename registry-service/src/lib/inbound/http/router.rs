use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::HeaderValue;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::delete_employee::delete_employee;
use super::handlers::get_company::get_company_by_cnpj;
use super::handlers::get_employee::get_employee;
use super::handlers::login::login;
use super::handlers::refresh_token::refresh_token;
use super::handlers::register_company::register_company;
use super::handlers::register_employee::register_employee;
use super::handlers::update_employee::update_employee;
use super::middleware::authenticate as auth_middleware;
use super::middleware::require_admin;
use crate::domain::company::ports::CompanyServicePort;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::domain::registration::ports::RegistrationServicePort;

#[derive(Clone)]
pub struct AppState {
    pub company_service: Arc<dyn CompanyServicePort>,
    pub employee_service: Arc<dyn EmployeeServicePort>,
    pub registration_service: Arc<dyn RegistrationServicePort>,
    pub authenticator: Arc<Authenticator>,
}

/// Build the HTTP router.
///
/// `allowed_origin` is either `*` for a permissive CORS policy or a single
/// origin such as `https://app.example.com`.
pub fn create_router(state: AppState, allowed_origin: &str) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/registrations/company", post(register_company))
        .route("/api/registrations/employee", post(register_employee));

    let protected_routes = Router::new()
        .route("/api/auth/refresh", post(refresh_token))
        .route("/api/companies/cnpj/:cnpj", get(get_company_by_cnpj))
        .route(
            "/api/employees/:employee_id",
            get(get_employee).patch(update_employee).merge(
                delete(delete_employee).route_layer(middleware::from_fn(require_admin)),
            ),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(cors_layer(allowed_origin))
        .with_state(state)
}

fn cors_layer(allowed_origin: &str) -> CorsLayer {
    if allowed_origin == "*" {
        return CorsLayer::permissive();
    }

    match allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(e) => {
            // Fail closed: no cross-origin requests at all.
            tracing::warn!(origin = allowed_origin, error = %e, "Ignoring invalid CORS origin");
            CorsLayer::new()
        }
    }
}

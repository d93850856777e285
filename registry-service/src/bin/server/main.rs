use std::sync::Arc;

use anyhow::Context;
use auth::Authenticator;
use auth::Clock;
use auth::JwtKeys;
use auth::PasswordHasher;
use auth::SystemClock;
use auth::TokenIssuer;
use auth::TokenValidator;
use registry_service::config::Config;
use registry_service::domain::company::service::CompanyService;
use registry_service::domain::employee::service::EmployeeService;
use registry_service::domain::registration::service::RegistrationService;
use registry_service::inbound::http::router::create_router;
use registry_service::inbound::http::router::AppState;
use registry_service::outbound::principals::EmployeePrincipalStore;
use registry_service::outbound::repositories::company::PostgresCompanyRepository;
use registry_service::outbound::repositories::employee::PostgresEmployeeRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "registry_service=debug,auth=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "registry-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt = ?config.jwt,
        cors_allowed_origin = %config.cors.allowed_origin,
        "Configuration loaded"
    );

    let keys = Arc::new(
        JwtKeys::from_secret(config.jwt.secret.as_bytes())
            .context("jwt.secret must be set to at least 32 bytes")?,
    );
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let password_hasher = PasswordHasher::new();
    let company_repository = Arc::new(PostgresCompanyRepository::new(pg_pool.clone()));
    let employee_repository = Arc::new(PostgresEmployeeRepository::new(pg_pool));

    let token_issuer = TokenIssuer::new(Arc::clone(&keys), config.jwt.lifetime()?, clock.clone())?;
    let token_validator = TokenValidator::new(keys, clock);
    let principal_store = Arc::new(EmployeePrincipalStore::new(Arc::clone(
        &employee_repository,
    )));
    let authenticator = Arc::new(Authenticator::new(
        password_hasher,
        token_issuer,
        token_validator,
        principal_store,
    )?);

    let state = AppState {
        company_service: Arc::new(CompanyService::new(Arc::clone(&company_repository))),
        employee_service: Arc::new(EmployeeService::new(
            Arc::clone(&employee_repository),
            password_hasher,
        )),
        registration_service: Arc::new(RegistrationService::new(
            company_repository,
            employee_repository,
            password_hasher,
        )),
        authenticator,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(state, &config.cors.allowed_origin);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}

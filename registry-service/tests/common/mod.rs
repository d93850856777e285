use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Clock;
use auth::JwtKeys;
use auth::ManualClock;
use auth::PasswordHasher;
use auth::TokenIssuer;
use auth::TokenValidator;
use chrono::Duration;
use chrono::Utc;
use registry_service::company::errors::CompanyError;
use registry_service::company::models::Company;
use registry_service::company::models::CompanyId;
use registry_service::company::ports::CompanyRepository;
use registry_service::company::service::CompanyService;
use registry_service::domain::values::Cnpj;
use registry_service::domain::values::Cpf;
use registry_service::employee::errors::EmployeeError;
use registry_service::employee::models::Employee;
use registry_service::employee::models::EmployeeId;
use registry_service::employee::ports::EmployeeRepository;
use registry_service::employee::service::EmployeeService;
use registry_service::inbound::http::router::create_router;
use registry_service::inbound::http::router::AppState;
use registry_service::outbound::principals::EmployeePrincipalStore;
use registry_service::registration::service::RegistrationService;
use serde_json::json;
use serde_json::Value;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TOKEN_LIFETIME_SECONDS: i64 = 3600;

pub const ACME_CNPJ: &str = "11222333000181";
pub const ADMIN_EMAIL: &str = "admin@acme.com";
pub const ADMIN_CPF: &str = "529.982.247-25";
pub const ADMIN_PASSWORD: &str = "admin-password";

/// Test application that spawns a real server over in-memory repositories
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub clock: Arc<ManualClock>,
    pub keys: Arc<JwtKeys>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let company_repository = Arc::new(InMemoryCompanyRepository::default());
        let employee_repository = Arc::new(InMemoryEmployeeRepository::default());

        let clock = Arc::new(ManualClock::new(Utc::now()));
        let keys = Arc::new(JwtKeys::from_secret(TEST_SECRET).expect("Invalid test secret"));
        let password_hasher = PasswordHasher::new();

        let token_issuer = TokenIssuer::new(
            Arc::clone(&keys),
            Duration::seconds(TOKEN_LIFETIME_SECONDS),
            clock.clone() as Arc<dyn Clock>,
        )
        .expect("Failed to create token issuer");
        let token_validator = TokenValidator::new(Arc::clone(&keys), clock.clone());
        let authenticator = Arc::new(
            Authenticator::new(
                password_hasher,
                token_issuer,
                token_validator,
                Arc::new(EmployeePrincipalStore::new(Arc::clone(&employee_repository))),
            )
            .expect("Failed to create authenticator"),
        );

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

        let router = create_router(state, "*");

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            clock,
            keys,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PATCH request with Bearer token
    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .patch(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register Acme with its administrator and return the response body.
    pub async fn register_company(&self) -> Value {
        self.register_company_with("11.222.333/0001-81", ADMIN_EMAIL, ADMIN_CPF, ADMIN_PASSWORD)
            .await
    }

    /// Register an arbitrary company with its administrator and return the
    /// response body.
    pub async fn register_company_with(
        &self,
        cnpj: &str,
        admin_email: &str,
        admin_cpf: &str,
        admin_password: &str,
    ) -> Value {
        let response = self
            .post("/api/registrations/company")
            .json(&json!({
                "cnpj": cnpj,
                "corporate_name": "Acme Ponto LTDA",
                "name": "Carla Dias",
                "email": admin_email,
                "cpf": admin_cpf,
                "password": admin_password
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse response")
    }

    /// Register an employee of Acme and return the response body.
    pub async fn register_employee(&self, email: &str, cpf: &str, password: &str) -> Value {
        let response = self
            .post("/api/registrations/employee")
            .json(&json!({
                "cnpj": ACME_CNPJ,
                "name": "Ana Souza",
                "email": email,
                "cpf": cpf,
                "password": password,
                "hourly_rate": "42.50",
                "daily_work_hours": 8.0,
                "lunch_hours": 1.0
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse response")
    }

    /// Log in and return the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Token missing")
            .to_string()
    }
}

#[derive(Default)]
pub struct InMemoryCompanyRepository {
    companies: Mutex<HashMap<CompanyId, Company>>,
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn create(&self, company: Company) -> Result<Company, CompanyError> {
        let mut companies = self.companies.lock().unwrap();
        if companies.values().any(|c| c.cnpj == company.cnpj) {
            return Err(CompanyError::CnpjAlreadyExists(company.cnpj.to_string()));
        }
        companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, CompanyError> {
        Ok(self.companies.lock().unwrap().get(id).cloned())
    }

    async fn find_by_cnpj(&self, cnpj: &Cnpj) -> Result<Option<Company>, CompanyError> {
        Ok(self
            .companies
            .lock()
            .unwrap()
            .values()
            .find(|c| &c.cnpj == cnpj)
            .cloned())
    }

    async fn delete(&self, id: &CompanyId) -> Result<(), CompanyError> {
        self.companies
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CompanyError::NotFound(id.to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    employees: Mutex<HashMap<EmployeeId, Employee>>,
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        let mut employees = self.employees.lock().unwrap();
        if employees.values().any(|e| e.cpf == employee.cpf) {
            return Err(EmployeeError::CpfAlreadyExists(employee.cpf.to_string()));
        }
        if employees.values().any(|e| e.email == employee.email) {
            return Err(EmployeeError::EmailAlreadyExists(employee.email.to_string()));
        }
        employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError> {
        Ok(self.employees.lock().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, EmployeeError> {
        Ok(self
            .employees
            .lock()
            .unwrap()
            .values()
            .find(|e| e.email.as_str() == email)
            .cloned())
    }

    async fn find_by_cpf(&self, cpf: &Cpf) -> Result<Option<Employee>, EmployeeError> {
        Ok(self
            .employees
            .lock()
            .unwrap()
            .values()
            .find(|e| &e.cpf == cpf)
            .cloned())
    }

    async fn update(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        let mut employees = self.employees.lock().unwrap();
        match employees.get_mut(&employee.id) {
            Some(stored) => {
                *stored = employee.clone();
                Ok(employee)
            }
            None => Err(EmployeeError::NotFound(employee.id.to_string())),
        }
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeError> {
        self.employees
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| EmployeeError::NotFound(id.to_string()))
    }
}

use async_trait::async_trait;

use crate::domain::registration::errors::RegistrationError;
use crate::domain::registration::models::CompanyRegistration;
use crate::domain::registration::models::EmployeeRegistration;
use crate::domain::registration::models::RegisterCompanyCommand;
use crate::domain::registration::models::RegisterEmployeeCommand;

/// Port for self-service registration of companies and employees.
#[async_trait]
pub trait RegistrationServicePort: Send + Sync + 'static {
    /// Register a company and its first administrator (`ROLE_ADMIN`).
    ///
    /// # Errors
    /// * `Rejected` - CNPJ, CPF or email already registered, or empty password
    /// * `Company` / `Employee` - Persistence failed
    async fn register_company(
        &self,
        command: RegisterCompanyCommand,
    ) -> Result<CompanyRegistration, RegistrationError>;

    /// Register an employee (`ROLE_USER`) of an existing company.
    ///
    /// # Errors
    /// * `Rejected` - Company unknown, CPF or email already registered, or empty password
    /// * `Company` / `Employee` - Persistence failed
    async fn register_employee(
        &self,
        command: RegisterEmployeeCommand,
    ) -> Result<EmployeeRegistration, RegistrationError>;
}

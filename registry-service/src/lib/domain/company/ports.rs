use async_trait::async_trait;

use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::Company;
use crate::domain::company::models::CompanyId;
use crate::domain::values::Cnpj;

/// Port for company domain service operations.
#[async_trait]
pub trait CompanyServicePort: Send + Sync + 'static {
    /// Retrieve a company by its CNPJ.
    ///
    /// # Errors
    /// * `NotFoundByCnpj` - No company registered with this CNPJ
    /// * `DatabaseError` - Database operation failed
    async fn get_company_by_cnpj(&self, cnpj: &Cnpj) -> Result<Company, CompanyError>;

    /// Retrieve a company by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Company does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_company(&self, id: &CompanyId) -> Result<Company, CompanyError>;
}

/// Persistence operations for company aggregate.
#[async_trait]
pub trait CompanyRepository: Send + Sync + 'static {
    /// Persist new company to storage.
    ///
    /// # Errors
    /// * `CnpjAlreadyExists` - CNPJ is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, company: Company) -> Result<Company, CompanyError>;

    /// Retrieve company by identifier.
    ///
    /// # Returns
    /// Optional company entity (None if not found)
    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, CompanyError>;

    /// Retrieve company by CNPJ.
    ///
    /// # Returns
    /// Optional company entity (None if not found)
    async fn find_by_cnpj(&self, cnpj: &Cnpj) -> Result<Option<Company>, CompanyError>;

    /// Remove company and, through the foreign key, its employees.
    ///
    /// # Errors
    /// * `NotFound` - Company does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &CompanyId) -> Result<(), CompanyError>;
}

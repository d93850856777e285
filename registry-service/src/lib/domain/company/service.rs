use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::Company;
use crate::domain::company::models::CompanyId;
use crate::domain::company::ports::CompanyRepository;
use crate::domain::company::ports::CompanyServicePort;
use crate::domain::values::Cnpj;

/// Domain service implementation for company queries.
pub struct CompanyService<CR>
where
    CR: CompanyRepository,
{
    repository: Arc<CR>,
}

impl<CR> CompanyService<CR>
where
    CR: CompanyRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CompanyServicePort for CompanyService<CR>
where
    CR: CompanyRepository,
{
    async fn get_company_by_cnpj(&self, cnpj: &Cnpj) -> Result<Company, CompanyError> {
        tracing::info!(cnpj = %cnpj, "Looking up company by CNPJ");

        self.repository
            .find_by_cnpj(cnpj)
            .await?
            .ok_or_else(|| CompanyError::NotFoundByCnpj(cnpj.to_string()))
    }

    async fn get_company(&self, id: &CompanyId) -> Result<Company, CompanyError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CompanyError::NotFound(id.to_string()))
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use auth::Principal;
use auth::PrincipalStore;
use auth::PrincipalStoreError;

use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::values::EmailAddress;

/// Resolves login identifiers (email addresses) to principals through the
/// employee repository.
pub struct EmployeePrincipalStore<ER>
where
    ER: EmployeeRepository,
{
    repository: Arc<ER>,
}

impl<ER> EmployeePrincipalStore<ER>
where
    ER: EmployeeRepository,
{
    pub fn new(repository: Arc<ER>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<ER> PrincipalStore for EmployeePrincipalStore<ER>
where
    ER: EmployeeRepository,
{
    async fn find_principal_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Principal>, PrincipalStoreError> {
        self.repository
            .find_by_email(&EmailAddress::normalize(identifier))
            .await
            .map(|employee| employee.map(|e| e.principal()))
            .map_err(|e| PrincipalStoreError(e.to_string()))
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use auth::Principal;
use chrono::Utc;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::UpdateEmployeeCommand;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::employee::ports::EmployeeServicePort;

/// Domain service implementation for employee operations.
///
/// Concrete implementation of EmployeeServicePort with dependency injection.
pub struct EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    repository: Arc<ER>,
    password_hasher: auth::PasswordHasher,
}

impl<ER> EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    /// Create a new employee service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Employee persistence implementation
    /// * `password_hasher` - Hasher for password changes
    pub fn new(repository: Arc<ER>, password_hasher: auth::PasswordHasher) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }

    async fn find_existing(&self, id: &EmployeeId) -> Result<Employee, EmployeeError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| EmployeeError::NotFound(id.to_string()))
    }

    /// Whether `actor` is an administrator of the company `target` belongs to.
    async fn administers(
        &self,
        actor: &Principal,
        target: &Employee,
    ) -> Result<bool, EmployeeError> {
        if !actor.is_admin() {
            return Ok(false);
        }

        let administrator = self.repository.find_by_email(&actor.identifier).await?;
        Ok(administrator.is_some_and(|admin| admin.company_id == target.company_id))
    }
}

#[async_trait]
impl<ER> EmployeeServicePort for EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, EmployeeError> {
        self.find_existing(id).await
    }

    async fn update_employee(
        &self,
        actor: &Principal,
        id: &EmployeeId,
        command: UpdateEmployeeCommand,
    ) -> Result<Employee, EmployeeError> {
        let mut employee = self.find_existing(id).await?;

        let is_self = actor.identifier == employee.email.as_str();
        if !is_self && !self.administers(actor, &employee).await? {
            tracing::warn!(
                actor = %actor.identifier,
                employee_id = %id,
                "Rejected update of another employee"
            );
            return Err(EmployeeError::Forbidden(id.to_string()));
        }

        if let Some(name) = command.name {
            employee.name = name;
        }

        if let Some(password) = command.password {
            employee.password_hash = self
                .password_hasher
                .hash(&password)
                .map_err(|e| EmployeeError::PasswordHashing(e.to_string()))?
                .ok_or(EmployeeError::PasswordRequired)?;
            tracing::info!(employee_id = %id, "Employee password changed");
        }

        if let Some(hourly_rate) = command.hourly_rate {
            employee.hourly_rate = Some(hourly_rate);
        }

        if let Some(hours) = command.daily_work_hours {
            employee.daily_work_hours = Some(hours);
        }

        if let Some(hours) = command.lunch_hours {
            employee.lunch_hours = Some(hours);
        }

        employee.updated_at = Utc::now();

        self.repository.update(employee).await
    }

    async fn delete_employee(
        &self,
        actor: &Principal,
        id: &EmployeeId,
    ) -> Result<(), EmployeeError> {
        let employee = self.find_existing(id).await?;

        if !self.administers(actor, &employee).await? {
            tracing::warn!(
                actor = %actor.identifier,
                employee_id = %id,
                "Rejected deletion outside the administrator's company"
            );
            return Err(EmployeeError::Forbidden(id.to_string()));
        }

        self.repository.delete(&employee.id).await?;
        tracing::info!(employee_id = %id, "Employee deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use auth::PasswordHasher;
    use auth::Role;
    use mockall::mock;

    use super::*;
    use crate::domain::company::models::CompanyId;
    use crate::domain::employee::models::HourlyRate;
    use crate::domain::values::Cpf;
    use crate::domain::values::EmailAddress;
    use crate::domain::values::PersonName;

    mock! {
        pub TestEmployeeRepository {}

        #[async_trait]
        impl EmployeeRepository for TestEmployeeRepository {
            async fn create(&self, employee: Employee) -> Result<Employee, EmployeeError>;
            async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, EmployeeError>;
            async fn find_by_cpf(&self, cpf: &Cpf) -> Result<Option<Employee>, EmployeeError>;
            async fn update(&self, employee: Employee) -> Result<Employee, EmployeeError>;
            async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeError>;
        }
    }

    fn employee(email: &str, role: Role) -> Employee {
        Employee {
            id: EmployeeId::new(),
            company_id: CompanyId::new(),
            name: PersonName::new("Ana Souza".to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            cpf: Cpf::new("529.982.247-25").unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            role,
            hourly_rate: None,
            daily_work_hours: None,
            lunch_hours: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn principal(email: &str, role: Role) -> Principal {
        Principal::new(email, role, "$argon2id$test_hash")
    }

    #[tokio::test]
    async fn test_get_employee_not_found() {
        let mut repository = MockTestEmployeeRepository::new();
        repository.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = EmployeeService::new(Arc::new(repository), PasswordHasher::new());

        let result = service.get_employee(&EmployeeId::new()).await;
        assert!(matches!(result, Err(EmployeeError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_employee_updates_own_password() {
        let mut repository = MockTestEmployeeRepository::new();
        let existing = employee("ana@example.com", Role::User);
        let id = existing.id;

        repository
            .expect_find_by_id()
            .withf(move |candidate| *candidate == id)
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_update()
            .withf(|updated| {
                updated.password_hash.starts_with("$argon2id$")
                    && updated.hourly_rate.map(|r| r.cents()) == Some(3550)
            })
            .times(1)
            .returning(|employee| Ok(employee));

        let service = EmployeeService::new(Arc::new(repository), PasswordHasher::new());
        let command = UpdateEmployeeCommand {
            password: Some("new-password".to_string()),
            hourly_rate: Some(HourlyRate::parse("35.50").unwrap()),
            ..Default::default()
        };

        let updated = service
            .update_employee(&principal("ana@example.com", Role::User), &id, command)
            .await
            .expect("Update failed");

        assert!(PasswordHasher::new()
            .verify("new-password", &updated.password_hash)
            .unwrap());
    }

    #[tokio::test]
    async fn test_employee_cannot_update_someone_else() {
        let mut repository = MockTestEmployeeRepository::new();
        let existing = employee("ana@example.com", Role::User);
        let id = existing.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_update().times(0);

        let service = EmployeeService::new(Arc::new(repository), PasswordHasher::new());
        let command = UpdateEmployeeCommand {
            name: Some(PersonName::new("Someone Else".to_string()).unwrap()),
            ..Default::default()
        };

        let result = service
            .update_employee(&principal("bruno@example.com", Role::User), &id, command)
            .await;
        assert!(matches!(result, Err(EmployeeError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_admin_updates_employee_of_own_company() {
        let mut repository = MockTestEmployeeRepository::new();
        let existing = employee("ana@example.com", Role::User);
        let id = existing.id;
        let mut admin = employee("boss@example.com", Role::Admin);
        admin.company_id = existing.company_id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_find_by_email()
            .withf(|email| email == "boss@example.com")
            .times(1)
            .returning(move |_| Ok(Some(admin.clone())));
        repository
            .expect_update()
            .withf(|updated| updated.name.as_str() == "Ana Souza Lima")
            .times(1)
            .returning(|employee| Ok(employee));

        let service = EmployeeService::new(Arc::new(repository), PasswordHasher::new());
        let command = UpdateEmployeeCommand {
            name: Some(PersonName::new("Ana Souza Lima".to_string()).unwrap()),
            ..Default::default()
        };

        let result = service
            .update_employee(&principal("boss@example.com", Role::Admin), &id, command)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_admin_of_another_company_cannot_update() {
        let mut repository = MockTestEmployeeRepository::new();
        let existing = employee("ana@example.com", Role::User);
        let id = existing.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(employee("mallory@example.com", Role::Admin))));
        repository.expect_update().times(0);

        let service = EmployeeService::new(Arc::new(repository), PasswordHasher::new());
        let command = UpdateEmployeeCommand {
            password: Some("attacker-password".to_string()),
            ..Default::default()
        };

        let result = service
            .update_employee(&principal("mallory@example.com", Role::Admin), &id, command)
            .await;
        assert!(matches!(result, Err(EmployeeError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_empty_new_password_is_rejected() {
        let mut repository = MockTestEmployeeRepository::new();
        let existing = employee("ana@example.com", Role::User);
        let id = existing.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_update().times(0);

        let service = EmployeeService::new(Arc::new(repository), PasswordHasher::new());
        let command = UpdateEmployeeCommand {
            password: Some(String::new()),
            ..Default::default()
        };

        let result = service
            .update_employee(&principal("ana@example.com", Role::User), &id, command)
            .await;
        assert!(matches!(result, Err(EmployeeError::PasswordRequired)));
    }

    #[tokio::test]
    async fn test_delete_employee_not_found() {
        let mut repository = MockTestEmployeeRepository::new();
        repository.expect_find_by_id().times(1).returning(|_| Ok(None));
        repository.expect_delete().times(0);

        let service = EmployeeService::new(Arc::new(repository), PasswordHasher::new());

        let result = service
            .delete_employee(&principal("boss@example.com", Role::Admin), &EmployeeId::new())
            .await;
        assert!(matches!(result, Err(EmployeeError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_admin_deletes_employee_of_own_company() {
        let mut repository = MockTestEmployeeRepository::new();
        let existing = employee("ana@example.com", Role::User);
        let id = existing.id;
        let mut admin = employee("boss@example.com", Role::Admin);
        admin.company_id = existing.company_id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(admin.clone())));
        repository
            .expect_delete()
            .withf(move |candidate| *candidate == id)
            .times(1)
            .returning(|_| Ok(()));

        let service = EmployeeService::new(Arc::new(repository), PasswordHasher::new());

        let result = service
            .delete_employee(&principal("boss@example.com", Role::Admin), &id)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_admin_of_another_company_cannot_delete() {
        let mut repository = MockTestEmployeeRepository::new();
        let existing = employee("ana@example.com", Role::User);
        let id = existing.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(employee("mallory@example.com", Role::Admin))));
        repository.expect_delete().times(0);

        let service = EmployeeService::new(Arc::new(repository), PasswordHasher::new());

        let result = service
            .delete_employee(&principal("mallory@example.com", Role::Admin), &id)
            .await;
        assert!(matches!(result, Err(EmployeeError::Forbidden(_))));
    }
}

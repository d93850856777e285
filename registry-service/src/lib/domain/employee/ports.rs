use async_trait::async_trait;
use auth::Principal;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::UpdateEmployeeCommand;
use crate::domain::values::Cpf;

/// Port for employee domain service operations.
#[async_trait]
pub trait EmployeeServicePort: Send + Sync + 'static {
    /// Retrieve employee by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, EmployeeError>;

    /// Update an employee on behalf of `actor`.
    ///
    /// Employees may update themselves; administrators may update anyone in
    /// their own company.
    /// A new password is rehashed before storage.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `Forbidden` - Actor is neither the employee nor an administrator of its company
    /// * `PasswordRequired` - New password is empty
    /// * `DatabaseError` - Database operation failed
    async fn update_employee(
        &self,
        actor: &Principal,
        id: &EmployeeId,
        command: UpdateEmployeeCommand,
    ) -> Result<Employee, EmployeeError>;

    /// Delete an existing employee.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `Forbidden` - Actor is not an administrator of the employee's company
    /// * `DatabaseError` - Database operation failed
    async fn delete_employee(
        &self,
        actor: &Principal,
        id: &EmployeeId,
    ) -> Result<(), EmployeeError>;
}

/// Persistence operations for employee aggregate.
#[async_trait]
pub trait EmployeeRepository: Send + Sync + 'static {
    /// Persist new employee to storage.
    ///
    /// # Errors
    /// * `CpfAlreadyExists` - CPF is already registered
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, employee: Employee) -> Result<Employee, EmployeeError>;

    /// Retrieve employee by identifier.
    ///
    /// # Returns
    /// Optional employee entity (None if not found)
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError>;

    /// Retrieve employee by email address (the login identifier).
    ///
    /// # Returns
    /// Optional employee entity (None if not found)
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, EmployeeError>;

    /// Retrieve employee by CPF.
    ///
    /// # Returns
    /// Optional employee entity (None if not found)
    async fn find_by_cpf(&self, cpf: &Cpf) -> Result<Option<Employee>, EmployeeError>;

    /// Update existing employee in storage.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, employee: Employee) -> Result<Employee, EmployeeError>;

    /// Remove employee from storage.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeError>;
}

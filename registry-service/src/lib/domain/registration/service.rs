use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::Role;
use chrono::Utc;

use crate::domain::company::models::Company;
use crate::domain::company::models::CompanyId;
use crate::domain::company::ports::CompanyRepository;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::registration::errors::RegistrationError;
use crate::domain::registration::errors::RegistrationViolation;
use crate::domain::registration::models::CompanyRegistration;
use crate::domain::registration::models::EmployeeRegistration;
use crate::domain::registration::models::NewEmployee;
use crate::domain::registration::models::RegisterCompanyCommand;
use crate::domain::registration::models::RegisterEmployeeCommand;
use crate::domain::registration::ports::RegistrationServicePort;

/// Registration workflows spanning the company and employee aggregates.
pub struct RegistrationService<CR, ER>
where
    CR: CompanyRepository,
    ER: EmployeeRepository,
{
    company_repository: Arc<CR>,
    employee_repository: Arc<ER>,
    password_hasher: PasswordHasher,
}

impl<CR, ER> RegistrationService<CR, ER>
where
    CR: CompanyRepository,
    ER: EmployeeRepository,
{
    pub fn new(
        company_repository: Arc<CR>,
        employee_repository: Arc<ER>,
        password_hasher: PasswordHasher,
    ) -> Self {
        Self {
            company_repository,
            employee_repository,
            password_hasher,
        }
    }

    /// Push a violation for every identity field of `person` that is taken.
    async fn check_person(
        &self,
        person: &NewEmployee,
        violations: &mut Vec<RegistrationViolation>,
    ) -> Result<(), RegistrationError> {
        if self
            .employee_repository
            .find_by_cpf(&person.cpf)
            .await?
            .is_some()
        {
            violations.push(RegistrationViolation::CpfAlreadyRegistered(
                person.cpf.to_string(),
            ));
        }

        if self
            .employee_repository
            .find_by_email(person.email.as_str())
            .await?
            .is_some()
        {
            violations.push(RegistrationViolation::EmailAlreadyRegistered(
                person.email.to_string(),
            ));
        }

        if person.password.is_empty() {
            violations.push(RegistrationViolation::PasswordRequired);
        }

        Ok(())
    }

    fn build_employee(
        &self,
        company_id: CompanyId,
        person: NewEmployee,
        role: Role,
    ) -> Result<Employee, RegistrationError> {
        let password_hash = self
            .password_hasher
            .hash(&person.password)
            .map_err(|e| EmployeeError::PasswordHashing(e.to_string()))?
            .ok_or_else(|| RegistrationError::Rejected(vec![RegistrationViolation::PasswordRequired]))?;

        let now = Utc::now();
        Ok(Employee {
            id: EmployeeId::new(),
            company_id,
            name: person.name,
            email: person.email,
            cpf: person.cpf,
            password_hash,
            role,
            hourly_rate: None,
            daily_work_hours: None,
            lunch_hours: None,
            created_at: now,
            updated_at: now,
        })
    }
}

#[async_trait]
impl<CR, ER> RegistrationServicePort for RegistrationService<CR, ER>
where
    CR: CompanyRepository,
    ER: EmployeeRepository,
{
    async fn register_company(
        &self,
        command: RegisterCompanyCommand,
    ) -> Result<CompanyRegistration, RegistrationError> {
        tracing::info!(cnpj = %command.cnpj, "Registering company");

        let mut violations = Vec::new();
        if self
            .company_repository
            .find_by_cnpj(&command.cnpj)
            .await?
            .is_some()
        {
            violations.push(RegistrationViolation::CompanyAlreadyRegistered(
                command.cnpj.to_string(),
            ));
        }
        self.check_person(&command.administrator, &mut violations)
            .await?;

        if !violations.is_empty() {
            tracing::warn!(cnpj = %command.cnpj, ?violations, "Company registration rejected");
            return Err(RegistrationError::Rejected(violations));
        }

        let company = Company::new(command.cnpj, command.corporate_name);
        let administrator = self.build_employee(company.id, command.administrator, Role::Admin)?;

        let company = self.company_repository.create(company).await?;
        let administrator = match self.employee_repository.create(administrator).await {
            Ok(administrator) => administrator,
            Err(e) => {
                tracing::error!(
                    company_id = %company.id,
                    error = %e,
                    "Administrator insert failed, removing company"
                );
                if let Err(cleanup) = self.company_repository.delete(&company.id).await {
                    tracing::error!(company_id = %company.id, error = %cleanup, "Company cleanup failed");
                }
                return Err(e.into());
            }
        };

        tracing::info!(
            company_id = %company.id,
            administrator_id = %administrator.id,
            "Company registered"
        );

        Ok(CompanyRegistration {
            company,
            administrator,
        })
    }

    async fn register_employee(
        &self,
        command: RegisterEmployeeCommand,
    ) -> Result<EmployeeRegistration, RegistrationError> {
        tracing::info!(cnpj = %command.cnpj, email = %command.employee.email, "Registering employee");

        let mut violations = Vec::new();
        let company = self.company_repository.find_by_cnpj(&command.cnpj).await?;
        if company.is_none() {
            violations.push(RegistrationViolation::CompanyNotRegistered(
                command.cnpj.to_string(),
            ));
        }
        self.check_person(&command.employee, &mut violations).await?;

        let company = match company {
            Some(company) if violations.is_empty() => company,
            _ => {
                tracing::warn!(cnpj = %command.cnpj, ?violations, "Employee registration rejected");
                return Err(RegistrationError::Rejected(violations));
            }
        };

        let mut employee = self.build_employee(company.id, command.employee, Role::User)?;
        employee.hourly_rate = command.hourly_rate;
        employee.daily_work_hours = command.daily_work_hours;
        employee.lunch_hours = command.lunch_hours;

        let employee = self.employee_repository.create(employee).await?;
        tracing::info!(employee_id = %employee.id, company_id = %company.id, "Employee registered");

        Ok(EmployeeRegistration { company, employee })
    }
}

use crate::domain::company::models::Company;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::HourlyRate;
use crate::domain::employee::models::WorkHours;
use crate::domain::values::Cnpj;
use crate::domain::values::CorporateName;
use crate::domain::values::Cpf;
use crate::domain::values::EmailAddress;
use crate::domain::values::PersonName;

/// Identity and credentials of a person being registered.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: PersonName,
    pub email: EmailAddress,
    pub cpf: Cpf,
    /// Plain text password (will be hashed by service)
    pub password: String,
}

/// Register a company together with its first administrator.
#[derive(Debug, Clone)]
pub struct RegisterCompanyCommand {
    pub cnpj: Cnpj,
    pub corporate_name: CorporateName,
    pub administrator: NewEmployee,
}

/// Register an employee of an already registered company.
#[derive(Debug, Clone)]
pub struct RegisterEmployeeCommand {
    pub cnpj: Cnpj,
    pub employee: NewEmployee,
    pub hourly_rate: Option<HourlyRate>,
    pub daily_work_hours: Option<WorkHours>,
    pub lunch_hours: Option<WorkHours>,
}

#[derive(Debug, Clone)]
pub struct CompanyRegistration {
    pub company: Company,
    pub administrator: Employee,
}

#[derive(Debug, Clone)]
pub struct EmployeeRegistration {
    pub company: Company,
    pub employee: Employee,
}

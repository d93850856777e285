use async_trait::async_trait;
use auth::Role;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::company::models::CompanyId;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::HourlyRate;
use crate::domain::employee::models::WorkHours;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::values::Cpf;
use crate::domain::values::EmailAddress;
use crate::domain::values::PersonName;
use crate::employee::errors::EmployeeError;

pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EmployeeRow {
    id: Uuid,
    company_id: Uuid,
    name: String,
    email: String,
    cpf: String,
    password_hash: String,
    role: String,
    hourly_rate_cents: Option<i64>,
    daily_work_hours: Option<f32>,
    lunch_hours: Option<f32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = EmployeeError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let role: Role = row
            .role
            .parse()
            .map_err(|e| EmployeeError::DatabaseError(format!("{}", e)))?;

        Ok(Employee {
            id: EmployeeId(row.id),
            company_id: CompanyId(row.company_id),
            name: PersonName::new(row.name)?,
            email: EmailAddress::new(row.email)?,
            cpf: Cpf::new(&row.cpf)?,
            password_hash: row.password_hash,
            role,
            hourly_rate: row.hourly_rate_cents.map(HourlyRate::from_cents).transpose()?,
            daily_work_hours: row.daily_work_hours.map(WorkHours::new).transpose()?,
            lunch_hours: row.lunch_hours.map(WorkHours::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn map_write_error(e: sqlx::Error, employee: &Employee) -> EmployeeError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            if db_err.constraint() == Some("employees_cpf_key") {
                return EmployeeError::CpfAlreadyExists(employee.cpf.to_string());
            }
            if db_err.constraint() == Some("employees_email_key") {
                return EmployeeError::EmailAlreadyExists(employee.email.to_string());
            }
        }
    }
    EmployeeError::DatabaseError(e.to_string())
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn create(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        sqlx::query(
            r#"
            INSERT INTO employees (
                id, company_id, name, email, cpf, password_hash, role,
                hourly_rate_cents, daily_work_hours, lunch_hours, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(employee.id.0)
        .bind(employee.company_id.0)
        .bind(employee.name.as_str())
        .bind(employee.email.as_str())
        .bind(employee.cpf.as_str())
        .bind(&employee.password_hash)
        .bind(employee.role.as_str())
        .bind(employee.hourly_rate.map(|rate| rate.cents()))
        .bind(employee.daily_work_hours.map(|hours| hours.value()))
        .bind(employee.lunch_hours.map(|hours| hours.value()))
        .bind(employee.created_at)
        .bind(employee.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &employee))?;

        Ok(employee)
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError> {
        sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, company_id, name, email, cpf, password_hash, role,
                   hourly_rate_cents, daily_work_hours, lunch_hours, created_at, updated_at
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EmployeeError::DatabaseError(e.to_string()))?
        .map(Employee::try_from)
        .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, EmployeeError> {
        sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, company_id, name, email, cpf, password_hash, role,
                   hourly_rate_cents, daily_work_hours, lunch_hours, created_at, updated_at
            FROM employees
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EmployeeError::DatabaseError(e.to_string()))?
        .map(Employee::try_from)
        .transpose()
    }

    async fn find_by_cpf(&self, cpf: &Cpf) -> Result<Option<Employee>, EmployeeError> {
        sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, company_id, name, email, cpf, password_hash, role,
                   hourly_rate_cents, daily_work_hours, lunch_hours, created_at, updated_at
            FROM employees
            WHERE cpf = $1
            "#,
        )
        .bind(cpf.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EmployeeError::DatabaseError(e.to_string()))?
        .map(Employee::try_from)
        .transpose()
    }

    async fn update(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET name = $2, password_hash = $3, hourly_rate_cents = $4,
                daily_work_hours = $5, lunch_hours = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(employee.id.0)
        .bind(employee.name.as_str())
        .bind(&employee.password_hash)
        .bind(employee.hourly_rate.map(|rate| rate.cents()))
        .bind(employee.daily_work_hours.map(|hours| hours.value()))
        .bind(employee.lunch_hours.map(|hours| hours.value()))
        .bind(employee.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &employee))?;

        if result.rows_affected() == 0 {
            return Err(EmployeeError::NotFound(employee.id.to_string()));
        }

        Ok(employee)
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeError> {
        let result = sqlx::query(
            r#"
            DELETE FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| EmployeeError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(EmployeeError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

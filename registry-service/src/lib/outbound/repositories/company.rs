use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::company::errors::CompanyError;
use crate::domain::company::models::Company;
use crate::domain::company::models::CompanyId;
use crate::domain::company::ports::CompanyRepository;
use crate::domain::values::Cnpj;
use crate::domain::values::CorporateName;

pub struct PostgresCompanyRepository {
    pool: PgPool,
}

impl PostgresCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CompanyRow {
    id: Uuid,
    cnpj: String,
    corporate_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CompanyRow> for Company {
    type Error = CompanyError;

    fn try_from(row: CompanyRow) -> Result<Self, Self::Error> {
        Ok(Company {
            id: CompanyId(row.id),
            cnpj: Cnpj::new(&row.cnpj)?,
            corporate_name: CorporateName::new(row.corporate_name)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn create(&self, company: Company) -> Result<Company, CompanyError> {
        sqlx::query(
            r#"
            INSERT INTO companies (id, cnpj, corporate_name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(company.id.0)
        .bind(company.cnpj.as_str())
        .bind(company.corporate_name.as_str())
        .bind(company.created_at)
        .bind(company.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("companies_cnpj_key")
                {
                    return CompanyError::CnpjAlreadyExists(company.cnpj.to_string());
                }
            }
            CompanyError::DatabaseError(e.to_string())
        })?;

        Ok(company)
    }

    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, CompanyError> {
        sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT id, cnpj, corporate_name, created_at, updated_at
            FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CompanyError::DatabaseError(e.to_string()))?
        .map(Company::try_from)
        .transpose()
    }

    async fn find_by_cnpj(&self, cnpj: &Cnpj) -> Result<Option<Company>, CompanyError> {
        sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT id, cnpj, corporate_name, created_at, updated_at
            FROM companies
            WHERE cnpj = $1
            "#,
        )
        .bind(cnpj.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CompanyError::DatabaseError(e.to_string()))?
        .map(Company::try_from)
        .transpose()
    }

    async fn delete(&self, id: &CompanyId) -> Result<(), CompanyError> {
        let result = sqlx::query(
            r#"
            DELETE FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| CompanyError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CompanyError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

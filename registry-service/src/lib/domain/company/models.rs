use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::values::Cnpj;
use crate::domain::values::CorporateName;

/// Company aggregate entity.
///
/// Registered together with its first administrator.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: CompanyId,
    pub cnpj: Cnpj,
    pub corporate_name: CorporateName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    /// Build a new, not yet persisted company.
    pub fn new(cnpj: Cnpj, corporate_name: CorporateName) -> Self {
        let now = Utc::now();
        Self {
            id: CompanyId::new(),
            cnpj,
            corporate_name,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Company unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompanyId(pub Uuid);

impl CompanyId {
    /// Generate a new random company ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CompanyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

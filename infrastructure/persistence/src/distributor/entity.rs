use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::distributor::model::Distributor;

#[derive(Debug, FromRow)]
pub struct DistributorEntity {
    pub id: Uuid,
    pub name: String,
    pub cnpj: Option<String>,
    pub contact: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DistributorEntity {
    pub fn into_domain(self) -> Distributor {
        Distributor::from_repository(
            self.id,
            self.name,
            self.cnpj,
            self.contact,
            self.notes,
            self.created_at,
        )
    }
}

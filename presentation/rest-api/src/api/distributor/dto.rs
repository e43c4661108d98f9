use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::distributor::model::Distributor;

#[derive(Debug, Clone, Object)]
pub struct DistributorRequest {
    /// Distributor name (cannot be empty, unique ignoring case)
    pub name: String,
    /// Brazilian company registration number
    #[oai(skip_serializing_if_is_none)]
    pub cnpj: Option<String>,
    /// Phone, e-mail or sales representative
    #[oai(skip_serializing_if_is_none)]
    pub contact: Option<String>,
    /// Free-form notes
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct DistributorResponse {
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub cnpj: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub contact: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Distributor> for DistributorResponse {
    fn from(distributor: Distributor) -> Self {
        Self {
            id: distributor.id.to_string(),
            name: distributor.name,
            cnpj: distributor.cnpj,
            contact: distributor.contact,
            notes: distributor.notes,
            created_at: distributor.created_at,
        }
    }
}

/// Result of a delete that cascades to price rows.
#[derive(Debug, Clone, Object)]
pub struct CascadeDeleteResponse {
    /// Price rows removed together with the record
    pub removed_prices: u64,
}

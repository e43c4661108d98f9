use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::DistributorError;
use crate::domain::shared::text::{contains_ignore_case, name_key, non_blank};

/// A supplier that quotes prices for products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distributor {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewDistributorProps {
    pub name: String,
    pub cnpj: Option<String>,
    pub contact: Option<String>,
    pub notes: Option<String>,
}

impl Distributor {
    pub fn new(props: NewDistributorProps) -> Result<Self, DistributorError> {
        let name = props.name.trim().to_string();
        if name.is_empty() {
            return Err(DistributorError::NameEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            cnpj: non_blank(props.cnpj),
            contact: non_blank(props.contact),
            notes: non_blank(props.notes),
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        cnpj: Option<String>,
        contact: Option<String>,
        notes: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            cnpj,
            contact,
            notes,
            created_at,
        }
    }

    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }

    /// Search filter: name substring or CNPJ substring.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim();
        term.is_empty()
            || contains_ignore_case(&self.name, term)
            || self.cnpj.as_deref().is_some_and(|c| c.contains(term))
    }
}

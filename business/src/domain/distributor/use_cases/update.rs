use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::distributor::errors::DistributorError;
use crate::domain::distributor::model::Distributor;

pub struct UpdateDistributorParams {
    pub id: Uuid,
    pub name: String,
    pub cnpj: Option<String>,
    pub contact: Option<String>,
    pub notes: Option<String>,
}

#[async_trait]
pub trait UpdateDistributorUseCase: Send + Sync {
    async fn execute(&self, params: UpdateDistributorParams)
    -> Result<Distributor, DistributorError>;
}

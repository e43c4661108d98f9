use async_trait::async_trait;

use crate::domain::distributor::errors::DistributorError;
use crate::domain::distributor::model::Distributor;

pub struct CreateDistributorParams {
    pub name: String,
    pub cnpj: Option<String>,
    pub contact: Option<String>,
    pub notes: Option<String>,
}

#[async_trait]
pub trait CreateDistributorUseCase: Send + Sync {
    async fn execute(&self, params: CreateDistributorParams)
    -> Result<Distributor, DistributorError>;
}

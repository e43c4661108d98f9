use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::distributor::errors::DistributorError;
use crate::domain::distributor::model::Distributor;

pub struct GetDistributorByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetDistributorByIdUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetDistributorByIdParams,
    ) -> Result<Distributor, DistributorError>;
}

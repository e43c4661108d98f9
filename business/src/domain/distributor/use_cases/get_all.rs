use async_trait::async_trait;

use crate::domain::distributor::errors::DistributorError;
use crate::domain::distributor::model::Distributor;

#[derive(Default)]
pub struct GetAllDistributorsParams {
    pub search: Option<String>,
}

#[async_trait]
pub trait GetAllDistributorsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAllDistributorsParams,
    ) -> Result<Vec<Distributor>, DistributorError>;
}

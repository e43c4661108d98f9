use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::distributor::errors::DistributorError;
use crate::domain::distributor::repository::DistributorRepository;
use crate::domain::distributor::use_cases::delete::{
    DeleteDistributorParams, DeleteDistributorUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::price::repository::PriceRepository;

pub struct DeleteDistributorUseCaseImpl {
    pub repository: Arc<dyn DistributorRepository>,
    pub price_repository: Arc<dyn PriceRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteDistributorUseCase for DeleteDistributorUseCaseImpl {
    async fn execute(&self, params: DeleteDistributorParams) -> Result<u64, DistributorError> {
        self.logger
            .info(&format!("Deleting distributor: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => DistributorError::NotFound,
                other => DistributorError::Repository(other),
            })?;

        // Prices reference the distributor and must go first.
        let removed_prices = self.price_repository.delete_by_distributor(params.id).await?;
        self.repository.delete(params.id).await?;

        self.logger.info(&format!(
            "Distributor deleted: {} ({} prices removed)",
            params.id, removed_prices
        ));
        Ok(removed_prices)
    }
}

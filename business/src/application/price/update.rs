use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::distributor::repository::DistributorRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::price::errors::PriceError;
use crate::domain::price::model::{Price, is_valid_price};
use crate::domain::price::repository::PriceRepository;
use crate::domain::price::use_cases::update::{UpdatePriceParams, UpdatePriceUseCase};

pub struct UpdatePriceUseCaseImpl {
    pub repository: Arc<dyn PriceRepository>,
    pub distributor_repository: Arc<dyn DistributorRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdatePriceUseCase for UpdatePriceUseCaseImpl {
    async fn execute(&self, params: UpdatePriceParams) -> Result<Price, PriceError> {
        self.logger.info(&format!("Updating price: {}", params.id));

        if !is_valid_price(params.price) {
            return Err(PriceError::InvalidValue);
        }
        let min_quantity = params.min_quantity.unwrap_or(1);
        if min_quantity == 0 {
            return Err(PriceError::InvalidMinQuantity);
        }

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PriceError::NotFound,
                other => PriceError::Repository(other),
            })?;

        let distributor_id = match params.distributor_id {
            Some(id) if id != existing.distributor_id => {
                self.distributor_repository
                    .get_by_id(id)
                    .await
                    .map_err(|e| match e {
                        RepositoryError::NotFound => PriceError::DistributorNotFound,
                        other => PriceError::Repository(other),
                    })?;
                id
            }
            _ => existing.distributor_id,
        };

        let updated = Price::from_repository(
            existing.id,
            existing.product_id,
            distributor_id,
            params.price,
            min_quantity,
            params.validity,
            existing.recorded_at,
        );
        self.repository.save(&updated).await?;

        self.logger.info(&format!("Price updated: {}", updated.id));
        Ok(updated)
    }
}

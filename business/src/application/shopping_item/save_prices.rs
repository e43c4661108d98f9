use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::price::model::{NewPriceProps, Price};
use crate::domain::price::repository::PriceRepository;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_item::use_cases::save_prices::{
    SaveListPricesUseCase, SavePricesReport,
};

pub struct SaveListPricesUseCaseImpl {
    pub repository: Arc<dyn ShoppingItemRepository>,
    pub price_repository: Arc<dyn PriceRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveListPricesUseCase for SaveListPricesUseCaseImpl {
    async fn execute(&self) -> Result<SavePricesReport, ShoppingItemError> {
        self.logger.info("Recording shopping list prices");

        let items = self.repository.get_all().await?;
        let mut report = SavePricesReport::default();

        for item in items.iter().filter(|i| i.price > 0.0) {
            let Some(distributor_id) = item.distributor_id else {
                continue;
            };

            let saved = match Price::new(NewPriceProps {
                product_id: item.product_id,
                distributor_id,
                price: item.price,
                min_quantity: None,
                validity: None,
            }) {
                Ok(price) => self
                    .price_repository
                    .save(&price)
                    .await
                    .map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };

            match saved {
                Ok(()) => report.saved += 1,
                Err(reason) => {
                    self.logger.warn(&format!(
                        "Could not record price of shopping item {}: {}",
                        item.id, reason
                    ));
                    report.failed += 1;
                }
            }
        }

        self.logger.info(&format!(
            "Shopping list prices recorded: {} saved, {} failed",
            report.saved, report.failed
        ));
        Ok(report)
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::distributor::repository::DistributorRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::price::repository::PriceRepository;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::{NewShoppingItemProps, ShoppingItem};
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_item::use_cases::add_product::{
    AddProductToListParams, AddProductToListUseCase,
};

pub struct AddProductToListUseCaseImpl {
    pub repository: Arc<dyn ShoppingItemRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub price_repository: Arc<dyn PriceRepository>,
    pub distributor_repository: Arc<dyn DistributorRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductToListUseCase for AddProductToListUseCaseImpl {
    async fn execute(
        &self,
        params: AddProductToListParams,
    ) -> Result<ShoppingItem, ShoppingItemError> {
        self.logger.info(&format!(
            "Adding product {} to the shopping list",
            params.product_id
        ));

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingItemError::ProductNotFound,
                other => ShoppingItemError::Repository(other),
            })?;

        if let Some(mut item) = self.repository.find_by_product_id(product.id).await? {
            item.increment();
            self.repository.save(&item).await?;
            self.logger.info(&format!(
                "Shopping item {} quantity raised to {}",
                item.id, item.quantity
            ));
            return Ok(item);
        }

        // get_by_product is ordered most recent first.
        let latest = self
            .price_repository
            .get_by_product(product.id)
            .await?
            .into_iter()
            .next();

        let props = match latest {
            Some(price) => {
                let distributor_name = match self
                    .distributor_repository
                    .get_by_id(price.distributor_id)
                    .await
                {
                    Ok(distributor) => Some(distributor.name),
                    Err(RepositoryError::NotFound) => None,
                    Err(e) => return Err(e.into()),
                };
                NewShoppingItemProps {
                    product_id: product.id,
                    product_name: product.name,
                    product_ean: product.ean,
                    distributor_id: Some(price.distributor_id),
                    distributor_name: distributor_name.clone(),
                    price: price.price,
                    last_price: Some(price.price),
                    last_distributor: distributor_name,
                }
            }
            None => {
                let fallback = self.distributor_repository.get_all().await?.into_iter().next();
                NewShoppingItemProps {
                    product_id: product.id,
                    product_name: product.name,
                    product_ean: product.ean,
                    distributor_id: fallback.as_ref().map(|d| d.id),
                    distributor_name: fallback.map(|d| d.name),
                    price: 0.0,
                    last_price: None,
                    last_distributor: None,
                }
            }
        };

        let item = ShoppingItem::new(props)?;
        self.repository.save(&item).await?;

        self.logger
            .info(&format!("Shopping item created: {}", item.id));
        Ok(item)
    }
}

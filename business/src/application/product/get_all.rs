use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError> {
        self.logger.debug("Listing products");

        let products = self.repository.get_all().await?;

        Ok(match params.search.as_deref() {
            Some(term) => products.into_iter().filter(|p| p.matches(term)).collect(),
            None => products,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockProductRepo, arc_logger, make_product};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_filter_products_by_name_or_ean() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                make_product(Uuid::new_v4(), "Amoxicilina 500mg", Some("7896004")),
                make_product(Uuid::new_v4(), "Dipirona", Some("7891058")),
            ])
        });

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: arc_logger(),
        };

        let by_name = use_case
            .execute(GetAllProductsParams {
                search: Some("amoxi".to_string()),
            })
            .await
            .unwrap();
        let by_ean = use_case
            .execute(GetAllProductsParams {
                search: Some("1058".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(by_name.len(), 1);
        assert_eq!(by_ean[0].name, "Dipirona");
    }
}

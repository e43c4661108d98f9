use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name.trim()));

        let product = Product::new(NewProductProps {
            name: params.name,
            ean: params.ean,
            manufacturer: params.manufacturer,
            category: params.category,
            unit: params.unit,
        })?;

        if self.repository.find_by_name(&product.name).await?.is_some() {
            return Err(ProductError::NameAlreadyExists);
        }
        if let Some(ean) = &product.ean
            && self.repository.find_by_ean(ean).await?.is_some()
        {
            return Err(ProductError::EanAlreadyExists);
        }

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product created: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::{ProductCategory, ProductUnit};
    use crate::test_utils::{MockProductRepo, arc_logger, make_product};
    use uuid::Uuid;

    fn params(name: &str, ean: Option<&str>) -> CreateProductParams {
        CreateProductParams {
            name: name.to_string(),
            ean: ean.map(str::to_string),
            manufacturer: Some("Medley".to_string()),
            category: ProductCategory::Referencia,
            unit: ProductUnit::Fr,
        }
    }

    #[tokio::test]
    async fn should_create_product_when_name_and_ean_are_new() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_name().returning(|_| Ok(None));
        mock_repo.expect_find_by_ean().returning(|_| Ok(None));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: arc_logger(),
        };

        let product = use_case
            .execute(params("Novalgina Gotas", Some("7891058017392")))
            .await
            .unwrap();

        assert_eq!(product.name, "Novalgina Gotas");
        assert_eq!(product.category, ProductCategory::Referencia);
        assert_eq!(product.unit, ProductUnit::Fr);
    }

    #[tokio::test]
    async fn should_reject_name_already_used_ignoring_case() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_name()
            .returning(|_| Ok(Some(make_product(Uuid::new_v4(), "novalgina gotas", None))));
        mock_repo.expect_save().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: arc_logger(),
        };

        let result = use_case.execute(params("Novalgina Gotas", None)).await;

        assert!(matches!(result.unwrap_err(), ProductError::NameAlreadyExists));
    }

    #[tokio::test]
    async fn should_reject_ean_already_used() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_name().returning(|_| Ok(None));
        mock_repo
            .expect_find_by_ean()
            .returning(|_| Ok(Some(make_product(Uuid::new_v4(), "Outro", Some("789")))));
        mock_repo.expect_save().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: arc_logger(),
        };

        let result = use_case.execute(params("Dipirona", Some("789"))).await;

        assert!(matches!(result.unwrap_err(), ProductError::EanAlreadyExists));
    }

    #[tokio::test]
    async fn should_skip_ean_lookup_when_product_has_no_ean() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_name().returning(|_| Ok(None));
        mock_repo.expect_find_by_ean().never();
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: arc_logger(),
        };

        assert!(use_case.execute(params("Gaze", Some("  "))).await.is_ok());
    }
}

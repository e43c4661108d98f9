use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::shared::text::{non_blank, normalize_ean};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(ProductError::NameEmpty);
        }

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        if let Some(other) = self.repository.find_by_name(&name).await?
            && other.id != existing.id
        {
            return Err(ProductError::NameAlreadyExists);
        }

        let ean = normalize_ean(params.ean.as_deref());
        if let Some(ean) = &ean
            && let Some(other) = self.repository.find_by_ean(ean).await?
            && other.id != existing.id
        {
            return Err(ProductError::EanAlreadyExists);
        }

        let updated = Product::from_repository(
            existing.id,
            name,
            ean,
            non_blank(params.manufacturer),
            params.category,
            params.unit,
            existing.created_at,
        );
        self.repository.save(&updated).await?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::{ProductCategory, ProductUnit};
    use crate::test_utils::{MockProductRepo, arc_logger, make_product};
    use uuid::Uuid;

    fn params(id: Uuid, name: &str, ean: Option<&str>) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: name.to_string(),
            ean: ean.map(str::to_string),
            manufacturer: None,
            category: ProductCategory::Similar,
            unit: ProductUnit::Un,
        }
    }

    #[tokio::test]
    async fn should_update_product_when_exists() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(make_product(id, "Dipirona", None)));
        mock_repo.expect_find_by_name().returning(|_| Ok(None));
        mock_repo.expect_find_by_ean().returning(|_| Ok(None));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: arc_logger(),
        };

        let product = use_case
            .execute(params(id, "Dipirona Sodica 1g", Some("7896")))
            .await
            .unwrap();

        assert_eq!(product.id, id);
        assert_eq!(product.name, "Dipirona Sodica 1g");
        assert_eq!(product.ean.as_deref(), Some("7896"));
        assert_eq!(product.category, ProductCategory::Similar);
    }

    #[tokio::test]
    async fn should_store_and_look_up_ean_as_digits() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(make_product(id, "Dipirona", None)));
        mock_repo.expect_find_by_name().returning(|_| Ok(None));
        mock_repo
            .expect_find_by_ean()
            .withf(|ean| ean == "7891058001155")
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: arc_logger(),
        };

        let product = use_case
            .execute(params(id, "Dipirona", Some("789.1058.001155")))
            .await
            .unwrap();

        assert_eq!(product.ean.as_deref(), Some("7891058001155"));
    }

    #[tokio::test]
    async fn should_allow_keeping_own_ean() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(make_product(id, "Dipirona", Some("7896"))));
        mock_repo
            .expect_find_by_name()
            .returning(move |_| Ok(Some(make_product(id, "Dipirona", Some("7896")))));
        mock_repo
            .expect_find_by_ean()
            .returning(move |_| Ok(Some(make_product(id, "Dipirona", Some("7896")))));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: arc_logger(),
        };

        assert!(use_case.execute(params(id, "Dipirona", Some("7896"))).await.is_ok());
    }

    #[tokio::test]
    async fn should_reject_ean_of_another_product() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(make_product(id, "Dipirona", None)));
        mock_repo.expect_find_by_name().returning(|_| Ok(None));
        mock_repo
            .expect_find_by_ean()
            .returning(|_| Ok(Some(make_product(Uuid::new_v4(), "Outro", Some("7896")))));
        mock_repo.expect_save().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: arc_logger(),
        };

        let result = use_case.execute(params(id, "Dipirona", Some("7896"))).await;

        assert!(matches!(result.unwrap_err(), ProductError::EanAlreadyExists));
    }

    #[tokio::test]
    async fn should_reject_update_when_name_is_empty() {
        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            logger: arc_logger(),
        };

        let result = use_case.execute(params(Uuid::new_v4(), " ", None)).await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: arc_logger(),
        };

        let result = use_case.execute(params(Uuid::new_v4(), "Gaze", None)).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}

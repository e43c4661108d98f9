use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::shared::text::{name_key, normalize_ean};

use super::store::{JsonStore, Table, find, insert_all, remove, upsert};

pub struct ProductRepositoryLocal {
    store: Arc<JsonStore>,
}

impl ProductRepositoryLocal {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    async fn rows(&self) -> Result<Vec<Product>, RepositoryError> {
        self.store.read(Table::Products).await
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryLocal {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut rows = self.rows().await?;
        rows.sort_by_cached_key(Product::name_key);
        Ok(rows)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        find(&self.rows().await?, id)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        let key = name_key(name);
        Ok(self.rows().await?.into_iter().find(|p| p.name_key() == key))
    }

    async fn find_by_ean(&self, ean: &str) -> Result<Option<Product>, RepositoryError> {
        let Some(ean) = normalize_ean(Some(ean)) else {
            return Ok(None);
        };

        Ok(self
            .rows()
            .await?
            .into_iter()
            .find(|p| p.ean.as_deref() == Some(ean.as_str())))
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        self.store
            .update(Table::Products, |rows| {
                upsert(rows, product);
                Ok(())
            })
            .await
    }

    async fn save_batch(&self, products: &[Product]) -> Result<(), RepositoryError> {
        self.store
            .update(Table::Products, |rows| insert_all(rows, products))
            .await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.store
            .update(Table::Products, |rows: &mut Vec<Product>| remove(rows, id))
            .await
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        self.store
            .update(Table::Products, |rows: &mut Vec<Product>| {
                let removed = rows.len() as u64;
                rows.clear();
                Ok(removed)
            })
            .await
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.rows().await?.len() as u64)
    }
}

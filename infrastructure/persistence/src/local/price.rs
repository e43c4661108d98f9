use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::price::model::Price;
use business::domain::price::repository::PriceRepository;

use super::store::{JsonStore, Table, find, insert_all, remove, remove_where, upsert};

pub struct PriceRepositoryLocal {
    store: Arc<JsonStore>,
}

impl PriceRepositoryLocal {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    async fn rows(&self) -> Result<Vec<Price>, RepositoryError> {
        self.store.read(Table::Prices).await
    }

    async fn delete_matching(&self, predicate: impl Fn(&Price) -> bool + Send) -> Result<u64, RepositoryError> {
        self.store
            .update(Table::Prices, |rows: &mut Vec<Price>| Ok(remove_where(rows, predicate)))
            .await
    }
}

#[async_trait]
impl PriceRepository for PriceRepositoryLocal {
    async fn get_all(&self) -> Result<Vec<Price>, RepositoryError> {
        let mut rows = self.rows().await?;
        rows.sort_by_key(|p| Reverse(p.recorded_at));
        Ok(rows)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Price, RepositoryError> {
        find(&self.rows().await?, id)
    }

    async fn get_by_product(&self, product_id: Uuid) -> Result<Vec<Price>, RepositoryError> {
        let mut rows: Vec<Price> = self
            .rows()
            .await?
            .into_iter()
            .filter(|p| p.product_id == product_id)
            .collect();
        rows.sort_by_key(|p| Reverse(p.recorded_at));
        Ok(rows)
    }

    async fn get_history(
        &self,
        product_id: Uuid,
        distributor_id: Option<Uuid>,
    ) -> Result<Vec<Price>, RepositoryError> {
        let mut rows: Vec<Price> = self
            .rows()
            .await?
            .into_iter()
            .filter(|p| p.product_id == product_id)
            .filter(|p| distributor_id.is_none_or(|d| p.distributor_id == d))
            .collect();
        rows.sort_by_key(|p| p.recorded_at);
        Ok(rows)
    }

    async fn save(&self, price: &Price) -> Result<(), RepositoryError> {
        self.store
            .update(Table::Prices, |rows| {
                upsert(rows, price);
                Ok(())
            })
            .await
    }

    async fn save_batch(&self, prices: &[Price]) -> Result<(), RepositoryError> {
        self.store
            .update(Table::Prices, |rows| insert_all(rows, prices))
            .await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.store
            .update(Table::Prices, |rows: &mut Vec<Price>| remove(rows, id))
            .await
    }

    async fn delete_by_product(&self, product_id: Uuid) -> Result<u64, RepositoryError> {
        self.delete_matching(|p| p.product_id == product_id).await
    }

    async fn delete_by_distributor(&self, distributor_id: Uuid) -> Result<u64, RepositoryError> {
        self.delete_matching(|p| p.distributor_id == distributor_id).await
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        self.delete_matching(|_| true).await
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.rows().await?.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tempfile::tempdir;

    fn price_at(product_id: Uuid, distributor_id: Uuid, value: f64, days_ago: i64) -> Price {
        Price::from_repository(
            Uuid::new_v4(),
            product_id,
            distributor_id,
            value,
            1,
            None,
            Utc::now() - Duration::days(days_ago),
        )
    }

    #[tokio::test]
    async fn should_order_product_prices_newest_first_and_history_oldest_first() {
        let dir = tempdir().unwrap();
        let repository = PriceRepositoryLocal::new(Arc::new(JsonStore::open(dir.path()).await.unwrap()));
        let product_id = Uuid::new_v4();
        let distributor_id = Uuid::new_v4();
        repository
            .save_batch(&[
                price_at(product_id, distributor_id, 10.0, 2),
                price_at(product_id, distributor_id, 12.0, 0),
                price_at(product_id, Uuid::new_v4(), 11.0, 1),
                price_at(Uuid::new_v4(), distributor_id, 99.0, 0),
            ])
            .await
            .unwrap();

        let latest: Vec<f64> = repository
            .get_by_product(product_id)
            .await
            .unwrap()
            .iter()
            .map(|p| p.price)
            .collect();
        let history: Vec<f64> = repository
            .get_history(product_id, Some(distributor_id))
            .await
            .unwrap()
            .iter()
            .map(|p| p.price)
            .collect();

        assert_eq!(latest, vec![12.0, 11.0, 10.0]);
        assert_eq!(history, vec![10.0, 12.0]);
    }

    #[tokio::test]
    async fn should_count_prices_removed_by_distributor() {
        let dir = tempdir().unwrap();
        let repository = PriceRepositoryLocal::new(Arc::new(JsonStore::open(dir.path()).await.unwrap()));
        let distributor_id = Uuid::new_v4();
        repository
            .save_batch(&[
                price_at(Uuid::new_v4(), distributor_id, 10.0, 0),
                price_at(Uuid::new_v4(), distributor_id, 11.0, 0),
                price_at(Uuid::new_v4(), Uuid::new_v4(), 12.0, 0),
            ])
            .await
            .unwrap();

        let removed = repository.delete_by_distributor(distributor_id).await.unwrap();

        assert_eq!(removed, 2);
        assert_eq!(repository.count().await.unwrap(), 1);
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shopping_item::model::ShoppingItem;
use business::domain::shopping_item::repository::ShoppingItemRepository;

use super::store::{JsonStore, Table, find, insert_all, remove, upsert};

pub struct ShoppingItemRepositoryLocal {
    store: Arc<JsonStore>,
}

impl ShoppingItemRepositoryLocal {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    async fn rows(&self) -> Result<Vec<ShoppingItem>, RepositoryError> {
        self.store.read(Table::ShoppingList).await
    }
}

#[async_trait]
impl ShoppingItemRepository for ShoppingItemRepositoryLocal {
    async fn get_all(&self) -> Result<Vec<ShoppingItem>, RepositoryError> {
        let mut rows = self.rows().await?;
        rows.sort_by_key(|item| item.created_at);
        Ok(rows)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<ShoppingItem, RepositoryError> {
        find(&self.rows().await?, id)
    }

    async fn find_by_product_id(
        &self,
        product_id: Uuid,
    ) -> Result<Option<ShoppingItem>, RepositoryError> {
        Ok(self
            .rows()
            .await?
            .into_iter()
            .find(|item| item.product_id == product_id))
    }

    async fn save(&self, item: &ShoppingItem) -> Result<(), RepositoryError> {
        self.store
            .update(Table::ShoppingList, |rows| {
                upsert(rows, item);
                Ok(())
            })
            .await
    }

    async fn save_batch(&self, items: &[ShoppingItem]) -> Result<(), RepositoryError> {
        self.store
            .update(Table::ShoppingList, |rows| insert_all(rows, items))
            .await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.store
            .update(Table::ShoppingList, |rows: &mut Vec<ShoppingItem>| remove(rows, id))
            .await
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        self.store
            .update(Table::ShoppingList, |rows: &mut Vec<ShoppingItem>| {
                let removed = rows.len() as u64;
                rows.clear();
                Ok(removed)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shopping_item::model::NewShoppingItemProps;
    use tempfile::tempdir;

    fn item(name: &str) -> ShoppingItem {
        ShoppingItem::new(NewShoppingItemProps {
            product_id: Uuid::new_v4(),
            product_name: name.to_string(),
            product_ean: None,
            distributor_id: None,
            distributor_name: None,
            price: 10.0,
            last_price: None,
            last_distributor: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_update_quantity_in_place() {
        let dir = tempdir().unwrap();
        let repository = ShoppingItemRepositoryLocal::new(Arc::new(JsonStore::open(dir.path()).await.unwrap()));
        let mut line = item("Dipirona");
        repository.save(&line).await.unwrap();

        line.set_quantity(3).unwrap();
        repository.save(&line).await.unwrap();

        let items = repository.get_all().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 3);
    }

    #[tokio::test]
    async fn should_find_line_by_product() {
        let dir = tempdir().unwrap();
        let repository = ShoppingItemRepositoryLocal::new(Arc::new(JsonStore::open(dir.path()).await.unwrap()));
        let line = item("Dipirona");
        repository.save_batch(&[line.clone(), item("Paracetamol")]).await.unwrap();

        let found = repository.find_by_product_id(line.product_id).await.unwrap();

        assert_eq!(found.map(|i| i.id), Some(line.id));
        assert_eq!(repository.delete_all().await.unwrap(), 2);
    }
}

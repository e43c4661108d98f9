use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::distributor::model::Distributor;
use business::domain::distributor::repository::DistributorRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::text::name_key;

use super::store::{JsonStore, Table, find, insert_all, remove, upsert};

pub struct DistributorRepositoryLocal {
    store: Arc<JsonStore>,
}

impl DistributorRepositoryLocal {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    async fn rows(&self) -> Result<Vec<Distributor>, RepositoryError> {
        self.store.read(Table::Distributors).await
    }
}

#[async_trait]
impl DistributorRepository for DistributorRepositoryLocal {
    async fn get_all(&self) -> Result<Vec<Distributor>, RepositoryError> {
        let mut rows = self.rows().await?;
        rows.sort_by_cached_key(Distributor::name_key);
        Ok(rows)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Distributor, RepositoryError> {
        find(&self.rows().await?, id)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Distributor>, RepositoryError> {
        let key = name_key(name);
        Ok(self.rows().await?.into_iter().find(|d| d.name_key() == key))
    }

    async fn save(&self, distributor: &Distributor) -> Result<(), RepositoryError> {
        self.store
            .update(Table::Distributors, |rows| {
                upsert(rows, distributor);
                Ok(())
            })
            .await
    }

    async fn save_batch(&self, distributors: &[Distributor]) -> Result<(), RepositoryError> {
        self.store
            .update(Table::Distributors, |rows| insert_all(rows, distributors))
            .await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.store
            .update(Table::Distributors, |rows: &mut Vec<Distributor>| remove(rows, id))
            .await
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        self.store
            .update(Table::Distributors, |rows: &mut Vec<Distributor>| {
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

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::distributor::model::NewDistributorProps;
    use tempfile::tempdir;

    fn distributor(name: &str) -> Distributor {
        Distributor::new(NewDistributorProps {
            name: name.to_string(),
            cnpj: None,
            contact: None,
            notes: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_list_distributors_by_name() {
        let dir = tempdir().unwrap();
        let repository = DistributorRepositoryLocal::new(Arc::new(JsonStore::open(dir.path()).await.unwrap()));
        repository
            .save_batch(&[distributor("Santa Cruz"), distributor("profarma"), distributor("Dimed")])
            .await
            .unwrap();

        let names: Vec<String> = repository
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();

        assert_eq!(names, vec!["Dimed", "profarma", "Santa Cruz"]);
    }

    #[tokio::test]
    async fn should_find_by_name_ignoring_case_and_spaces() {
        let dir = tempdir().unwrap();
        let repository = DistributorRepositoryLocal::new(Arc::new(JsonStore::open(dir.path()).await.unwrap()));
        repository.save(&distributor("Profarma")).await.unwrap();

        let found = repository.find_by_name("  PROFARMA ").await.unwrap();

        assert_eq!(found.map(|d| d.name), Some("Profarma".to_string()));
    }

    #[tokio::test]
    async fn should_report_not_found_on_missing_delete() {
        let dir = tempdir().unwrap();
        let repository = DistributorRepositoryLocal::new(Arc::new(JsonStore::open(dir.path()).await.unwrap()));

        let result = repository.delete(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), RepositoryError::NotFound));
    }
}

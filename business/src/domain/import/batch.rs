use async_trait::async_trait;

use crate::domain::distributor::model::Distributor;
use crate::domain::distributor::repository::DistributorRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::price::model::Price;
use crate::domain::price::repository::PriceRepository;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shopping_item::model::ShoppingItem;
use crate::domain::shopping_item::repository::ShoppingItemRepository;

/// Chunk size used when no other value is configured.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Storage that accepts a whole chunk atomically or single records.
#[async_trait]
pub trait BatchSink<T: Sync>: Send + Sync {
    async fn insert_batch(&self, items: &[T]) -> Result<(), RepositoryError>;
    async fn insert_one(&self, item: &T) -> Result<(), RepositoryError>;
}

macro_rules! batch_sink {
    ($repository:path, $model:ty) => {
        #[async_trait]
        impl BatchSink<$model> for dyn $repository {
            async fn insert_batch(&self, items: &[$model]) -> Result<(), RepositoryError> {
                self.save_batch(items).await
            }

            async fn insert_one(&self, item: &$model) -> Result<(), RepositoryError> {
                self.save(item).await
            }
        }
    };
}

batch_sink!(DistributorRepository, Distributor);
batch_sink!(ProductRepository, Product);
batch_sink!(PriceRepository, Price);
batch_sink!(ShoppingItemRepository, ShoppingItem);

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub inserted: u64,
    /// Positions (in the input slice) of records that could not be stored.
    pub failed: Vec<usize>,
}

/// Inserts `items` in sequential chunks. A chunk that fails as a whole is
/// retried record by record so one bad row does not sink its neighbours.
pub async fn insert_in_chunks<T, S>(
    sink: &S,
    items: &[T],
    chunk_size: usize,
    logger: &dyn Logger,
) -> BatchOutcome
where
    T: Sync,
    S: BatchSink<T> + ?Sized,
{
    let mut outcome = BatchOutcome::default();
    let chunk_size = chunk_size.max(1);

    for (chunk_index, chunk) in items.chunks(chunk_size).enumerate() {
        let offset = chunk_index * chunk_size;
        match sink.insert_batch(chunk).await {
            Ok(()) => outcome.inserted += chunk.len() as u64,
            Err(e) => {
                logger.warn(&format!(
                    "Batch {} of {} rows failed ({e}), retrying one by one",
                    chunk_index + 1,
                    chunk.len()
                ));
                for (position, item) in chunk.iter().enumerate() {
                    match sink.insert_one(item).await {
                        Ok(()) => outcome.inserted += 1,
                        Err(e) => {
                            logger.error(&format!("Row insert failed: {e}"));
                            outcome.failed.push(offset + position);
                        }
                    }
                }
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::test_utils::mock_logger;

    /// Rejects any batch containing a negative value and any single negative value.
    struct FlakySink {
        stored: Mutex<Vec<i32>>,
        batch_calls: Mutex<usize>,
    }

    #[async_trait]
    impl BatchSink<i32> for FlakySink {
        async fn insert_batch(&self, items: &[i32]) -> Result<(), RepositoryError> {
            *self.batch_calls.lock().unwrap() += 1;
            if items.iter().any(|v| *v < 0) {
                return Err(RepositoryError::DatabaseError);
            }
            self.stored.lock().unwrap().extend_from_slice(items);
            Ok(())
        }

        async fn insert_one(&self, item: &i32) -> Result<(), RepositoryError> {
            if *item < 0 {
                return Err(RepositoryError::DatabaseError);
            }
            self.stored.lock().unwrap().push(*item);
            Ok(())
        }
    }

    fn sink() -> FlakySink {
        FlakySink {
            stored: Mutex::new(Vec::new()),
            batch_calls: Mutex::new(0),
        }
    }

    #[tokio::test]
    async fn should_insert_in_chunks_of_given_size() {
        let sink = sink();
        let items: Vec<i32> = (0..250).collect();

        let outcome = insert_in_chunks(&sink, &items, 100, &mock_logger()).await;

        assert_eq!(outcome.inserted, 250);
        assert!(outcome.failed.is_empty());
        assert_eq!(*sink.batch_calls.lock().unwrap(), 3);
    }

    #[tokio::test]
    async fn should_fall_back_to_single_inserts_when_chunk_fails() {
        let sink = sink();
        let items = vec![1, 2, 3, -4, 5];

        let outcome = insert_in_chunks(&sink, &items, 2, &mock_logger()).await;

        assert_eq!(outcome.inserted, 4);
        assert_eq!(outcome.failed, vec![3]);
        assert_eq!(*sink.stored.lock().unwrap(), vec![1, 2, 3, 5]);
    }
}

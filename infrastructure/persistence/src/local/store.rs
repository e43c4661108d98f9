//! File-backed storage used when no database is configured.
//!
//! Every table is a JSON array in its own file under the store directory.
//! A missing file reads as an empty table. Writes hold one async mutex for the
//! whole read-modify-write cycle and land through a temp file plus rename, so a
//! reader never sees a half-written table.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use uuid::Uuid;

use business::domain::distributor::model::Distributor;
use business::domain::errors::RepositoryError;
use business::domain::price::model::Price;
use business::domain::product::model::Product;
use business::domain::shopping_item::model::ShoppingItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Distributors,
    Products,
    Prices,
    ShoppingList,
}

impl Table {
    pub fn key(self) -> &'static str {
        match self {
            Table::Distributors => "pharmacompare_distributors",
            Table::Products => "pharmacompare_products",
            Table::Prices => "pharmacompare_prices",
            Table::ShoppingList => "pharmacompare_shopping_list",
        }
    }
}

pub struct JsonStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Opens the store, creating the directory when needed.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            tracing::error!("Could not create local store at {}: {e}", dir.display());
            RepositoryError::Persistence
        })?;

        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, table: Table) -> PathBuf {
        self.dir.join(format!("{}.json", table.key()))
    }

    pub async fn read<T: DeserializeOwned>(&self, table: Table) -> Result<Vec<T>, RepositoryError> {
        let path = self.path(table);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                tracing::error!("Could not read {}: {e}", path.display());
                return Err(RepositoryError::Persistence);
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!("Corrupted table {}: {e}", path.display());
            RepositoryError::CorruptedStore
        })
    }

    /// Runs `change` against the current rows and writes them back.
    ///
    /// Nothing is written when `change` fails.
    pub async fn update<T, R, F>(&self, table: Table, change: F) -> Result<R, RepositoryError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>) -> Result<R, RepositoryError>,
    {
        let _guard = self.write_lock.lock().await;

        let mut rows = self.read::<T>(table).await?;
        let result = change(&mut rows)?;
        self.write(table, &rows).await?;

        Ok(result)
    }

    async fn write<T: Serialize>(&self, table: Table, rows: &[T]) -> Result<(), RepositoryError> {
        let path = self.path(table);
        let temp = self.dir.join(format!("{}.json.tmp", table.key()));

        let bytes = serde_json::to_vec_pretty(rows).map_err(|e| {
            tracing::error!("Could not serialize {}: {e}", table.key());
            RepositoryError::Persistence
        })?;

        tokio::fs::write(&temp, bytes).await.map_err(|e| {
            tracing::error!("Could not write {}: {e}", temp.display());
            RepositoryError::Persistence
        })?;
        tokio::fs::rename(&temp, &path).await.map_err(|e| {
            tracing::error!("Could not replace {}: {e}", path.display());
            RepositoryError::Persistence
        })
    }
}

/// Rows addressed by a primary key.
pub(crate) trait Keyed {
    fn key(&self) -> Uuid;
}

impl Keyed for Distributor {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for Product {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for Price {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for ShoppingItem {
    fn key(&self) -> Uuid {
        self.id
    }
}

pub(crate) fn find<T: Keyed + Clone>(rows: &[T], id: Uuid) -> Result<T, RepositoryError> {
    rows.iter()
        .find(|row| row.key() == id)
        .cloned()
        .ok_or(RepositoryError::NotFound)
}

pub(crate) fn upsert<T: Keyed + Clone>(rows: &mut Vec<T>, item: &T) {
    match rows.iter_mut().find(|row| row.key() == item.key()) {
        Some(row) => *row = item.clone(),
        None => rows.push(item.clone()),
    }
}

/// Appends every item or none: a clashing id rejects the whole batch.
pub(crate) fn insert_all<T: Keyed + Clone>(rows: &mut Vec<T>, items: &[T]) -> Result<(), RepositoryError> {
    let mut seen: std::collections::HashSet<Uuid> = rows.iter().map(Keyed::key).collect();
    if items.iter().any(|item| !seen.insert(item.key())) {
        return Err(RepositoryError::Duplicated);
    }

    rows.extend_from_slice(items);
    Ok(())
}

pub(crate) fn remove<T: Keyed>(rows: &mut Vec<T>, id: Uuid) -> Result<(), RepositoryError> {
    let before = rows.len();
    rows.retain(|row| row.key() != id);

    if rows.len() == before {
        return Err(RepositoryError::NotFound);
    }
    Ok(())
}

pub(crate) fn remove_where<T>(rows: &mut Vec<T>, predicate: impl Fn(&T) -> bool) -> u64 {
    let before = rows.len();
    rows.retain(|row| !predicate(row));
    (before - rows.len()) as u64
}

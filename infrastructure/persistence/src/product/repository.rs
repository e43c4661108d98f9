use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::shared::text::normalize_ean;

use super::entity::ProductEntity;
use crate::db::db_error;

const COLUMNS: &str = "id, name, ean, manufacturer, category, unit, created_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {COLUMNS} FROM products ORDER BY LOWER(name)"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {COLUMNS} FROM products WHERE LOWER(TRIM(name)) = LOWER(TRIM($1)) LIMIT 1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find_by_ean(&self, ean: &str) -> Result<Option<Product>, RepositoryError> {
        let Some(ean) = normalize_ean(Some(ean)) else {
            return Ok(None);
        };

        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {COLUMNS} FROM products WHERE ean = $1 LIMIT 1"
        ))
        .bind(ean)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, name, ean, manufacturer, category, unit, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                ean = EXCLUDED.ean,
                manufacturer = EXCLUDED.manufacturer,
                category = EXCLUDED.category,
                unit = EXCLUDED.unit"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.ean)
        .bind(&product.manufacturer)
        .bind(product.category.to_string())
        .bind(product.unit.to_string())
        .bind(product.created_at)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn save_batch(&self, products: &[Product]) -> Result<(), RepositoryError> {
        if products.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::<Postgres>::new(format!("INSERT INTO products ({COLUMNS}) "));
        builder.push_values(products, |mut row, product| {
            row.push_bind(product.id)
                .push_bind(product.name.clone())
                .push_bind(product.ean.clone())
                .push_bind(product.manufacturer.clone())
                .push_bind(product.category.to_string())
                .push_bind(product.unit.to_string())
                .push_bind(product.created_at);
        });

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(count.max(0) as u64)
    }
}

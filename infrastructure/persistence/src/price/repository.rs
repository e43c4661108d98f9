use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::price::model::Price;
use business::domain::price::repository::PriceRepository;

use super::entity::PriceEntity;
use crate::db::{db_error, to_decimal};

const COLUMNS: &str = "id, product_id, distributor_id, price, min_quantity, validity, recorded_at";

pub struct PriceRepositoryPostgres {
    pool: PgPool,
}

impl PriceRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn delete_where(&self, column: &str, id: Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query(&format!("DELETE FROM prices WHERE {column} = $1"))
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected())
    }
}

fn min_quantity(price: &Price) -> i32 {
    i32::try_from(price.min_quantity).unwrap_or(i32::MAX)
}

#[async_trait]
impl PriceRepository for PriceRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Price>, RepositoryError> {
        let entities = sqlx::query_as::<_, PriceEntity>(&format!(
            "SELECT {COLUMNS} FROM prices ORDER BY recorded_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Price, RepositoryError> {
        let entity = sqlx::query_as::<_, PriceEntity>(&format!(
            "SELECT {COLUMNS} FROM prices WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_product(&self, product_id: Uuid) -> Result<Vec<Price>, RepositoryError> {
        let entities = sqlx::query_as::<_, PriceEntity>(&format!(
            "SELECT {COLUMNS} FROM prices WHERE product_id = $1 ORDER BY recorded_at DESC"
        ))
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_history(
        &self,
        product_id: Uuid,
        distributor_id: Option<Uuid>,
    ) -> Result<Vec<Price>, RepositoryError> {
        let entities = sqlx::query_as::<_, PriceEntity>(&format!(
            "SELECT {COLUMNS} FROM prices
            WHERE product_id = $1 AND ($2::uuid IS NULL OR distributor_id = $2)
            ORDER BY recorded_at ASC"
        ))
        .bind(product_id)
        .bind(distributor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, price: &Price) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO prices (id, product_id, distributor_id, price, min_quantity, validity, recorded_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                distributor_id = EXCLUDED.distributor_id,
                price = EXCLUDED.price,
                min_quantity = EXCLUDED.min_quantity,
                validity = EXCLUDED.validity"#,
        )
        .bind(price.id)
        .bind(price.product_id)
        .bind(price.distributor_id)
        .bind(to_decimal(price.price)?)
        .bind(min_quantity(price))
        .bind(price.validity)
        .bind(price.recorded_at)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn save_batch(&self, prices: &[Price]) -> Result<(), RepositoryError> {
        if prices.is_empty() {
            return Ok(());
        }

        let rows = prices
            .iter()
            .map(|price| Ok((price, to_decimal(price.price)?)))
            .collect::<Result<Vec<_>, RepositoryError>>()?;

        let mut builder = QueryBuilder::<Postgres>::new(format!("INSERT INTO prices ({COLUMNS}) "));
        builder.push_values(rows, |mut row, (price, value)| {
            row.push_bind(price.id)
                .push_bind(price.product_id)
                .push_bind(price.distributor_id)
                .push_bind(value)
                .push_bind(min_quantity(price))
                .push_bind(price.validity)
                .push_bind(price.recorded_at);
        });

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        if self.delete_where("id", id).await? == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete_by_product(&self, product_id: Uuid) -> Result<u64, RepositoryError> {
        self.delete_where("product_id", product_id).await
    }

    async fn delete_by_distributor(&self, distributor_id: Uuid) -> Result<u64, RepositoryError> {
        self.delete_where("distributor_id", distributor_id).await
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM prices")
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM prices")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(count.max(0) as u64)
    }
}

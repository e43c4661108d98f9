use async_trait::async_trait;
use bigdecimal::BigDecimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shopping_item::model::ShoppingItem;
use business::domain::shopping_item::repository::ShoppingItemRepository;

use super::entity::ShoppingItemEntity;
use crate::db::{db_error, to_decimal};

const COLUMNS: &str = "id, product_id, product_name, product_ean, distributor_id, distributor_name, \
                       price, quantity, last_price, last_distributor, created_at, updated_at";

pub struct ShoppingItemRepositoryPostgres {
    pool: PgPool,
}

impl ShoppingItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

struct Amounts {
    price: BigDecimal,
    quantity: i32,
    last_price: Option<BigDecimal>,
}

fn amounts(item: &ShoppingItem) -> Result<Amounts, RepositoryError> {
    Ok(Amounts {
        price: to_decimal(item.price)?,
        quantity: i32::try_from(item.quantity).unwrap_or(i32::MAX),
        last_price: item.last_price.map(to_decimal).transpose()?,
    })
}

#[async_trait]
impl ShoppingItemRepository for ShoppingItemRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<ShoppingItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShoppingItemEntity>(&format!(
            "SELECT {COLUMNS} FROM shopping_list ORDER BY created_at ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<ShoppingItem, RepositoryError> {
        let entity = sqlx::query_as::<_, ShoppingItemEntity>(&format!(
            "SELECT {COLUMNS} FROM shopping_list WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_product_id(
        &self,
        product_id: Uuid,
    ) -> Result<Option<ShoppingItem>, RepositoryError> {
        let entity = sqlx::query_as::<_, ShoppingItemEntity>(&format!(
            "SELECT {COLUMNS} FROM shopping_list WHERE product_id = $1 LIMIT 1"
        ))
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, item: &ShoppingItem) -> Result<(), RepositoryError> {
        let amounts = amounts(item)?;

        sqlx::query(
            r#"INSERT INTO shopping_list (id, product_id, product_name, product_ean, distributor_id, distributor_name,
                price, quantity, last_price, last_distributor, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (id) DO UPDATE SET
                distributor_id = EXCLUDED.distributor_id,
                distributor_name = EXCLUDED.distributor_name,
                price = EXCLUDED.price,
                quantity = EXCLUDED.quantity,
                last_price = EXCLUDED.last_price,
                last_distributor = EXCLUDED.last_distributor,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(item.id)
        .bind(item.product_id)
        .bind(&item.product_name)
        .bind(&item.product_ean)
        .bind(item.distributor_id)
        .bind(&item.distributor_name)
        .bind(amounts.price)
        .bind(amounts.quantity)
        .bind(amounts.last_price)
        .bind(&item.last_distributor)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn save_batch(&self, items: &[ShoppingItem]) -> Result<(), RepositoryError> {
        if items.is_empty() {
            return Ok(());
        }

        let rows = items
            .iter()
            .map(|item| Ok((item, amounts(item)?)))
            .collect::<Result<Vec<_>, RepositoryError>>()?;

        let mut builder = QueryBuilder::<Postgres>::new(format!("INSERT INTO shopping_list ({COLUMNS}) "));
        builder.push_values(rows, |mut row, (item, amounts)| {
            row.push_bind(item.id)
                .push_bind(item.product_id)
                .push_bind(item.product_name.clone())
                .push_bind(item.product_ean.clone())
                .push_bind(item.distributor_id)
                .push_bind(item.distributor_name.clone())
                .push_bind(amounts.price)
                .push_bind(amounts.quantity)
                .push_bind(amounts.last_price)
                .push_bind(item.last_distributor.clone())
                .push_bind(item.created_at)
                .push_bind(item.updated_at);
        });

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM shopping_list WHERE id = $1")
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
        let result = sqlx::query("DELETE FROM shopping_list")
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected())
    }
}

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use business::domain::distributor::model::Distributor;
use business::domain::distributor::repository::DistributorRepository;
use business::domain::errors::RepositoryError;

use super::entity::DistributorEntity;
use crate::db::db_error;

const COLUMNS: &str = "id, name, cnpj, contact, notes, created_at";

pub struct DistributorRepositoryPostgres {
    pool: PgPool,
}

impl DistributorRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DistributorRepository for DistributorRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Distributor>, RepositoryError> {
        let entities = sqlx::query_as::<_, DistributorEntity>(&format!(
            "SELECT {COLUMNS} FROM distributors ORDER BY LOWER(name)"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Distributor, RepositoryError> {
        let entity = sqlx::query_as::<_, DistributorEntity>(&format!(
            "SELECT {COLUMNS} FROM distributors WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Distributor>, RepositoryError> {
        let entity = sqlx::query_as::<_, DistributorEntity>(&format!(
            "SELECT {COLUMNS} FROM distributors WHERE LOWER(TRIM(name)) = LOWER(TRIM($1)) LIMIT 1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, distributor: &Distributor) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO distributors (id, name, cnpj, contact, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                cnpj = EXCLUDED.cnpj,
                contact = EXCLUDED.contact,
                notes = EXCLUDED.notes"#,
        )
        .bind(distributor.id)
        .bind(&distributor.name)
        .bind(&distributor.cnpj)
        .bind(&distributor.contact)
        .bind(&distributor.notes)
        .bind(distributor.created_at)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn save_batch(&self, distributors: &[Distributor]) -> Result<(), RepositoryError> {
        if distributors.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::<Postgres>::new(format!("INSERT INTO distributors ({COLUMNS}) "));
        builder.push_values(distributors, |mut row, distributor| {
            row.push_bind(distributor.id)
                .push_bind(distributor.name.clone())
                .push_bind(distributor.cnpj.clone())
                .push_bind(distributor.contact.clone())
                .push_bind(distributor.notes.clone())
                .push_bind(distributor.created_at);
        });

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM distributors WHERE id = $1")
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
        let result = sqlx::query("DELETE FROM distributors")
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM distributors")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(count.max(0) as u64)
    }
}

//! Repository for the `comics` table.

use async_trait::async_trait;
use comics_core::comics::ENTITY;
use comics_core::types::ComicId;
use sqlx::PgPool;

use crate::error::GatewayError;
use crate::models::comics::{Comics, CreateComics};
use crate::repositories::ComicsGateway;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, price, description, year, image";

/// PostgreSQL-backed [`ComicsGateway`].
#[derive(Debug, Clone)]
pub struct ComicsRepo {
    pool: PgPool,
}

impl ComicsRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Unsigned fields live in `BIGINT` columns.
fn to_bigint(value: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(value).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

#[async_trait]
impl ComicsGateway for ComicsRepo {
    async fn list(&self) -> Result<Vec<Comics>, GatewayError> {
        let query = format!("SELECT {COLUMNS} FROM comics ORDER BY created_at, id");
        let rows = sqlx::query_as::<_, Comics>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: ComicId) -> Result<Comics, GatewayError> {
        let query = format!("SELECT {COLUMNS} FROM comics WHERE id = $1");
        sqlx::query_as::<_, Comics>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(GatewayError::NotFound { entity: ENTITY, id })
    }

    async fn create(&self, input: &CreateComics) -> Result<Comics, GatewayError> {
        let query = format!(
            "INSERT INTO comics (id, name, price, description, year, image)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Comics>(&query)
            .bind(ComicId::new_v4())
            .bind(&input.name)
            .bind(to_bigint(input.price)?)
            .bind(&input.description)
            .bind(to_bigint(input.year)?)
            .bind(&input.image)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_price(&self, id: ComicId, price: u64) -> Result<(), GatewayError> {
        self.get_by_id(id).await?;

        sqlx::query("UPDATE comics SET price = $2 WHERE id = $1")
            .bind(id)
            .bind(to_bigint(price)?)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: ComicId) -> Result<(), GatewayError> {
        self.get_by_id(id).await?;

        sqlx::query("DELETE FROM comics WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

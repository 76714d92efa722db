//! Repository for the `regionais` table.

use plano_core::payload::RegionalPayload;
use plano_core::types::DbId;
use sqlx::PgPool;

use crate::models::regional::Regional;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome_regional, created_at, created_by";

/// Provides CRUD operations for regionais.
pub struct RegionalRepo;

impl RegionalRepo {
    /// Insert a new regional attributed to `created_by`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &RegionalPayload,
        created_by: DbId,
    ) -> Result<Regional, sqlx::Error> {
        let query = format!(
            "INSERT INTO regionais (nome_regional, created_by)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Regional>(&query)
            .bind(&input.nome_regional)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Regional>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM regionais WHERE id = $1");
        sqlx::query_as::<_, Regional>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every regional ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Regional>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM regionais ORDER BY nome_regional ASC");
        sqlx::query_as::<_, Regional>(&query).fetch_all(pool).await
    }

    /// Rename a regional. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &RegionalPayload,
    ) -> Result<Option<Regional>, sqlx::Error> {
        let query = format!(
            "UPDATE regionais SET nome_regional = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Regional>(&query)
            .bind(id)
            .bind(&input.nome_regional)
            .fetch_optional(pool)
            .await
    }

    /// Delete a regional. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while responsáveis or plan actions
    /// still reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM regionais WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

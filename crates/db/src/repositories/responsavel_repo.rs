//! Repository for the `responsaveis` table.

use plano_core::payload::ResponsavelPayload;
use plano_core::types::DbId;
use sqlx::PgPool;

use crate::models::responsavel::{Responsavel, ResponsavelWithRegional};

const COLUMNS: &str = "id, nome_responsavel, regional_id, created_at, created_by";

/// Columns for reads joined with `regionais r`.
const JOINED_COLUMNS: &str = "s.id, s.nome_responsavel, s.regional_id, s.created_at, \
                              s.created_by, r.nome_regional";

/// Provides CRUD operations for responsáveis.
pub struct ResponsavelRepo;

impl ResponsavelRepo {
    pub async fn create(
        pool: &PgPool,
        input: &ResponsavelPayload,
        created_by: DbId,
    ) -> Result<Responsavel, sqlx::Error> {
        let query = format!(
            "INSERT INTO responsaveis (nome_responsavel, regional_id, created_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Responsavel>(&query)
            .bind(&input.nome_responsavel)
            .bind(input.regional_id)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ResponsavelWithRegional>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM responsaveis s
             JOIN regionais r ON r.id = s.regional_id
             WHERE s.id = $1"
        );
        sqlx::query_as::<_, ResponsavelWithRegional>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every responsável with its regional's current name, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<ResponsavelWithRegional>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM responsaveis s
             JOIN regionais r ON r.id = s.regional_id
             ORDER BY s.nome_responsavel ASC"
        );
        sqlx::query_as::<_, ResponsavelWithRegional>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update name and regional. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ResponsavelPayload,
    ) -> Result<Option<Responsavel>, sqlx::Error> {
        let query = format!(
            "UPDATE responsaveis SET
                nome_responsavel = $2,
                regional_id = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Responsavel>(&query)
            .bind(id)
            .bind(&input.nome_responsavel)
            .bind(input.regional_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a responsável. Fails with a foreign-key violation while plan
    /// actions still reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM responsaveis WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

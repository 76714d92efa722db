//! Repository for the `plano_anual` table.
//!
//! `data_atualizacao` is stamped with the database clock on every write and
//! `created_by` only on insert, so an update can never reassign attribution.

use plano_core::filter::PlanoFilter;
use plano_core::payload::PlanoPayload;
use plano_core::status::PlanoStatus;
use plano_core::types::DbId;
use sqlx::PgPool;

use crate::models::plano_anual::{PlanoAnual, PlanoAnualWithNames};

const COLUMNS: &str = "id, regional_id, responsavel_id, acao, descricao, objetivo, \
                       prazo_inicio, prazo_fim, status, observacoes, data_atualizacao, \
                       created_at, created_by";

/// Columns for reads joined with `regionais r` and `responsaveis s`.
const JOINED_COLUMNS: &str = "p.id, p.regional_id, p.responsavel_id, p.acao, p.descricao, \
                              p.objetivo, p.prazo_inicio, p.prazo_fim, p.status, \
                              p.observacoes, p.data_atualizacao, p.created_at, p.created_by, \
                              r.nome_regional, s.nome_responsavel";

const JOINS: &str = "FROM plano_anual p
             JOIN regionais r ON r.id = p.regional_id
             JOIN responsaveis s ON s.id = p.responsavel_id";

/// Provides CRUD and listing operations for plan actions.
pub struct PlanoAnualRepo;

impl PlanoAnualRepo {
    /// Insert a plan action attributed to `created_by`.
    pub async fn create(
        pool: &PgPool,
        input: &PlanoPayload,
        created_by: DbId,
    ) -> Result<PlanoAnual, sqlx::Error> {
        let query = format!(
            "INSERT INTO plano_anual
                (regional_id, responsavel_id, acao, descricao, objetivo,
                 prazo_inicio, prazo_fim, status, observacoes, data_atualizacao, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW(), $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlanoAnual>(&query)
            .bind(input.regional_id)
            .bind(input.responsavel_id)
            .bind(&input.acao)
            .bind(&input.descricao)
            .bind(&input.objetivo)
            .bind(input.prazo_inicio)
            .bind(input.prazo_fim)
            .bind(input.status.as_str())
            .bind(&input.observacoes)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a plan action with its parent names.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PlanoAnualWithNames>, sqlx::Error> {
        let query = format!("SELECT {JOINED_COLUMNS} {JOINS} WHERE p.id = $1");
        sqlx::query_as::<_, PlanoAnualWithNames>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List plan actions matching every supplied filter, latest deadline first.
    ///
    /// Rows sharing a `prazo_fim` come back in whatever order the planner
    /// chooses; callers must not rely on it.
    pub async fn list(
        pool: &PgPool,
        filter: &PlanoFilter,
    ) -> Result<Vec<PlanoAnualWithNames>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} {JOINS}
             WHERE ($1::BIGINT IS NULL OR p.regional_id = $1)
               AND ($2::BIGINT IS NULL OR p.responsavel_id = $2)
               AND ($3::TEXT IS NULL OR p.status = $3)
             ORDER BY p.prazo_fim DESC"
        );
        sqlx::query_as::<_, PlanoAnualWithNames>(&query)
            .bind(filter.regional_id)
            .bind(filter.responsavel_id)
            .bind(filter.status.map(PlanoStatus::as_str))
            .fetch_all(pool)
            .await
    }

    /// Status of every plan action, for dashboard aggregation.
    pub async fn list_statuses(pool: &PgPool) -> Result<Vec<PlanoStatus>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as("SELECT status FROM plano_anual")
            .fetch_all(pool)
            .await?;
        rows.into_iter()
            .map(|(status,)| {
                status
                    .parse::<PlanoStatus>()
                    .map_err(|e| sqlx::Error::Decode(Box::new(e)))
            })
            .collect()
    }

    /// Replace every editable field and refresh `data_atualizacao`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PlanoPayload,
    ) -> Result<Option<PlanoAnual>, sqlx::Error> {
        let query = format!(
            "UPDATE plano_anual SET
                regional_id = $2,
                responsavel_id = $3,
                acao = $4,
                descricao = $5,
                objetivo = $6,
                prazo_inicio = $7,
                prazo_fim = $8,
                status = $9,
                observacoes = $10,
                data_atualizacao = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlanoAnual>(&query)
            .bind(id)
            .bind(input.regional_id)
            .bind(input.responsavel_id)
            .bind(&input.acao)
            .bind(&input.descricao)
            .bind(&input.objetivo)
            .bind(input.prazo_inicio)
            .bind(input.prazo_fim)
            .bind(input.status.as_str())
            .bind(&input.observacoes)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a plan action. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM plano_anual WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

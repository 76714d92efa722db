//! Plan action model.

use plano_core::status::PlanoStatus;
use plano_core::types::{Date, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `plano_anual` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlanoAnual {
    pub id: DbId,
    pub regional_id: DbId,
    pub responsavel_id: DbId,
    pub acao: String,
    pub descricao: Option<String>,
    pub objetivo: Option<String>,
    pub prazo_inicio: Date,
    pub prazo_fim: Date,
    #[sqlx(try_from = "String")]
    pub status: PlanoStatus,
    pub observacoes: Option<String>,
    pub data_atualizacao: Timestamp,
    pub created_at: Timestamp,
    pub created_by: Option<DbId>,
}

/// A plan action with the display names of its regional and responsável,
/// resolved at read time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlanoAnualWithNames {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub plano: PlanoAnual,
    pub nome_regional: String,
    pub nome_responsavel: String,
}

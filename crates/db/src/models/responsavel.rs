//! Responsável entity model.

use plano_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `responsaveis` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Responsavel {
    pub id: DbId,
    pub nome_responsavel: String,
    pub regional_id: DbId,
    pub created_at: Timestamp,
    pub created_by: Option<DbId>,
}

/// A responsável joined with its regional's current name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ResponsavelWithRegional {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub responsavel: Responsavel,
    pub nome_regional: String,
}

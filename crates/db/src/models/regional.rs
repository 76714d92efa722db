//! Regional entity model.

use plano_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `regionais` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Regional {
    pub id: DbId,
    pub nome_regional: String,
    pub created_at: Timestamp,
    pub created_by: Option<DbId>,
}

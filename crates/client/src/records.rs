//! Rows as the store returns them.

use plano_core::filter::BelongsToRegional;
use plano_core::status::PlanoStatus;
use plano_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regional {
    pub id: DbId,
    pub nome_regional: String,
    pub created_at: Timestamp,
    pub created_by: Option<DbId>,
}

/// A responsável with its regional's current name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responsavel {
    pub id: DbId,
    pub nome_responsavel: String,
    pub regional_id: DbId,
    pub nome_regional: String,
    pub created_at: Timestamp,
    pub created_by: Option<DbId>,
}

impl BelongsToRegional for Responsavel {
    fn regional_id(&self) -> DbId {
        self.regional_id
    }
}

/// A plan action with the names of its regional and responsável.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanoAnual {
    pub id: DbId,
    pub regional_id: DbId,
    pub responsavel_id: DbId,
    pub acao: String,
    pub descricao: Option<String>,
    pub objetivo: Option<String>,
    pub prazo_inicio: Date,
    pub prazo_fim: Date,
    pub status: PlanoStatus,
    pub observacoes: Option<String>,
    pub data_atualizacao: Timestamp,
    pub created_at: Timestamp,
    pub created_by: Option<DbId>,
    pub nome_regional: String,
    pub nome_responsavel: String,
}

/// The signed-in actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
}

/// Tokens handed out by sign-in, sign-up and session restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: User,
}

//! Write payloads for the three resources.
//!
//! These are the JSON bodies of `POST` and `PUT` requests. Attribution
//! (`created_by`) and `data_atualizacao` are never part of a payload: the
//! store stamps them from the authenticated actor and its own clock.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::status::PlanoStatus;
use crate::types::{Date, DbId};

/// Body for creating or renaming a regional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegionalPayload {
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub nome_regional: String,
}

/// Body for creating or updating a responsável.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ResponsavelPayload {
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub nome_responsavel: String,
    pub regional_id: DbId,
}

/// Body for creating or updating a plan action.
///
/// The store does not check that `responsavel_id` belongs to `regional_id`;
/// only the form's option filtering keeps them consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PlanoPayload {
    pub regional_id: DbId,
    pub responsavel_id: DbId,
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub acao: String,
    pub descricao: Option<String>,
    pub objetivo: Option<String>,
    pub prazo_inicio: Date,
    pub prazo_fim: Date,
    #[serde(default)]
    pub status: PlanoStatus,
    pub observacoes: Option<String>,
}

impl PlanoPayload {
    /// Store blank optional texts as absent.
    pub fn normalize(&mut self) {
        for field in [&mut self.descricao, &mut self.objetivo, &mut self.observacoes] {
            if field.as_deref().is_some_and(|text| text.trim().is_empty()) {
                *field = None;
            }
        }
    }
}

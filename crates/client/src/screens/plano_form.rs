//! Create/edit form for a plan action.
//!
//! The draft mirrors the form fields, so required values are optional here
//! until the user fills them in. Nothing reaches the store until the draft
//! converts into a valid [`PlanoPayload`].

use plano_core::filter::options_for_regional;
use plano_core::messages;
use plano_core::payload::PlanoPayload;
use plano_core::status::PlanoStatus;
use plano_core::types::{Date, DbId};
use plano_core::validation::validate_payload;

use crate::records::{PlanoAnual, Responsavel};
use crate::store::PlanStore;

/// Field values of the form as typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanoDraft {
    pub regional_id: Option<DbId>,
    pub responsavel_id: Option<DbId>,
    pub acao: String,
    pub descricao: String,
    pub objetivo: String,
    pub prazo_inicio: Option<Date>,
    pub prazo_fim: Option<Date>,
    pub status: PlanoStatus,
    pub observacoes: String,
}

impl PlanoDraft {
    /// Changing the regional always clears the responsável.
    pub fn select_regional(&mut self, regional_id: Option<DbId>) {
        self.regional_id = regional_id;
        self.responsavel_id = None;
    }

    /// Responsáveis selectable for the chosen regional; none until one is chosen.
    pub fn responsavel_options<'a>(&self, responsaveis: &'a [Responsavel]) -> Vec<&'a Responsavel> {
        match self.regional_id {
            Some(id) => options_for_regional(responsaveis, Some(id)),
            None => Vec::new(),
        }
    }

    /// Build the write payload, or fail with the message to show.
    pub fn to_payload(&self) -> Result<PlanoPayload, &'static str> {
        let (Some(regional_id), Some(responsavel_id), Some(prazo_inicio), Some(prazo_fim)) = (
            self.regional_id,
            self.responsavel_id,
            self.prazo_inicio,
            self.prazo_fim,
        ) else {
            return Err(messages::FILL_REQUIRED_FIELDS);
        };

        let optional = |text: &str| Some(text.to_string());
        let mut payload = PlanoPayload {
            regional_id,
            responsavel_id,
            acao: self.acao.clone(),
            descricao: optional(&self.descricao),
            objetivo: optional(&self.objetivo),
            prazo_inicio,
            prazo_fim,
            status: self.status,
            observacoes: optional(&self.observacoes),
        };
        validate_payload(&payload).map_err(|_| messages::FILL_REQUIRED_FIELDS)?;
        payload.normalize();
        Ok(payload)
    }
}

impl From<&PlanoAnual> for PlanoDraft {
    fn from(plano: &PlanoAnual) -> Self {
        Self {
            regional_id: Some(plano.regional_id),
            responsavel_id: Some(plano.responsavel_id),
            acao: plano.acao.clone(),
            descricao: plano.descricao.clone().unwrap_or_default(),
            objetivo: plano.objetivo.clone().unwrap_or_default(),
            prazo_inicio: Some(plano.prazo_inicio),
            prazo_fim: Some(plano.prazo_fim),
            status: plano.status,
            observacoes: plano.observacoes.clone().unwrap_or_default(),
        }
    }
}

/// "Nova Ação" / "Editar Ação".
#[derive(Debug, Clone, Default)]
pub struct PlanoForm {
    editing: Option<DbId>,
    pub draft: PlanoDraft,
    error: Option<&'static str>,
    saving: bool,
}

impl PlanoForm {
    /// Empty form; status starts as `Planejado`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing row.
    pub fn edit(plano: &PlanoAnual) -> Self {
        Self {
            editing: Some(plano.id),
            draft: PlanoDraft::from(plano),
            ..Self::default()
        }
    }

    pub fn editing(&self) -> Option<DbId> {
        self.editing
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Editar Ação"
        } else {
            "Nova Ação"
        }
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Validate and write. Returns `true` on success.
    ///
    /// Invalid drafts never reach the store. On failure the draft is kept
    /// so the user can retry.
    pub async fn submit(&mut self, store: &dyn PlanStore) -> bool {
        let payload = match self.draft.to_payload() {
            Ok(payload) => payload,
            Err(message) => {
                self.error = Some(message);
                return false;
            }
        };

        self.saving = true;
        self.error = None;
        let result = match self.editing {
            Some(id) => store.update_plano(id, &payload).await,
            None => store.create_plano(&payload).await,
        };
        self.saving = false;

        match result {
            Ok(plano) => {
                tracing::info!(plano_id = plano.id, "Plan action saved");
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, editing = ?self.editing, "Failed to save plan action");
                self.error = Some(messages::SAVE_PLANO_FAILED);
                false
            }
        }
    }
}

//! "Responsáveis": list with regional names, add, inline edit and guarded
//! deletion.

use std::sync::Arc;

use plano_core::messages;
use plano_core::payload::ResponsavelPayload;
use plano_core::types::DbId;
use plano_core::validation::validate_payload;

use crate::confirm::Confirmation;
use crate::guard::ViewGuard;
use crate::records::{Regional, Responsavel};
use crate::store::PlanStore;

/// Input of the add row, or of a row in inline edit mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponsavelDraft {
    pub nome_responsavel: String,
    pub regional_id: Option<DbId>,
}

impl ResponsavelDraft {
    fn to_payload(&self) -> Result<ResponsavelPayload, &'static str> {
        let regional_id = self.regional_id.ok_or(messages::FILL_ALL_FIELDS)?;
        let payload = ResponsavelPayload {
            nome_responsavel: self.nome_responsavel.trim().to_string(),
            regional_id,
        };
        validate_payload(&payload).map_err(|_| messages::FILL_ALL_FIELDS)?;
        Ok(payload)
    }
}

pub struct ResponsaveisScreen {
    store: Arc<dyn PlanStore>,
    guard: ViewGuard,
    regionais: Vec<Regional>,
    responsaveis: Vec<Responsavel>,
    pub new_draft: ResponsavelDraft,
    editing: Option<(DbId, ResponsavelDraft)>,
    delete: Confirmation<DbId>,
    error: Option<&'static str>,
    busy: bool,
}

impl ResponsaveisScreen {
    pub fn new(store: Arc<dyn PlanStore>, guard: ViewGuard) -> Self {
        Self {
            store,
            guard,
            regionais: Vec::new(),
            responsaveis: Vec::new(),
            new_draft: ResponsavelDraft::default(),
            editing: None,
            delete: Confirmation::new(messages::CONFIRM_DELETE_RESPONSAVEL),
            error: None,
            busy: false,
        }
    }

    pub fn regionais(&self) -> &[Regional] {
        &self.regionais
    }

    pub fn responsaveis(&self) -> &[Responsavel] {
        &self.responsaveis
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub async fn load(&mut self) {
        let (regionais, responsaveis) =
            tokio::join!(self.store.list_regionais(), self.store.list_responsaveis());
        if !self.guard.is_current() {
            return;
        }

        match (regionais, responsaveis) {
            (Ok(regionais), Ok(responsaveis)) => {
                self.regionais = regionais;
                self.responsaveis = responsaveis;
            }
            (Err(err), _) | (_, Err(err)) => {
                tracing::warn!(error = %err, "Failed to load responsáveis");
                self.error = Some(messages::LOAD_DATA_FAILED);
            }
        }
    }

    pub async fn add(&mut self) -> bool {
        let payload = match self.new_draft.to_payload() {
            Ok(payload) => payload,
            Err(message) => {
                self.error = Some(message);
                return false;
            }
        };

        self.busy = true;
        self.error = None;
        let result = self.store.create_responsavel(&payload).await;
        self.busy = false;
        if !self.guard.is_current() {
            return result.is_ok();
        }

        match result {
            Ok(responsavel) => {
                tracing::info!(responsavel_id = responsavel.id, "Responsável created");
                self.new_draft = ResponsavelDraft::default();
                self.load().await;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to create responsável");
                self.error = Some(messages::CREATE_RESPONSAVEL_FAILED);
                false
            }
        }
    }

    // ---- inline edit ----

    pub fn editing(&self) -> Option<&(DbId, ResponsavelDraft)> {
        self.editing.as_ref()
    }

    pub fn start_edit(&mut self, id: DbId) {
        if let Some(row) = self.responsaveis.iter().find(|r| r.id == id) {
            let draft = ResponsavelDraft {
                nome_responsavel: row.nome_responsavel.clone(),
                regional_id: Some(row.regional_id),
            };
            self.editing = Some((id, draft));
        }
    }

    pub fn edit_draft_mut(&mut self) -> Option<&mut ResponsavelDraft> {
        self.editing.as_mut().map(|(_, draft)| draft)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub async fn save_edit(&mut self) -> bool {
        let Some((id, draft)) = self.editing.clone() else {
            return false;
        };
        let payload = match draft.to_payload() {
            Ok(payload) => payload,
            Err(message) => {
                self.error = Some(message);
                return false;
            }
        };

        self.busy = true;
        self.error = None;
        let result = self.store.update_responsavel(id, &payload).await;
        self.busy = false;
        if !self.guard.is_current() {
            return result.is_ok();
        }

        match result {
            Ok(_) => {
                self.editing = None;
                self.load().await;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, responsavel_id = id, "Failed to update responsável");
                self.error = Some(messages::UPDATE_RESPONSAVEL_FAILED);
                false
            }
        }
    }

    // ---- delete ----

    pub fn request_delete(&mut self, id: DbId) {
        self.delete.request(id);
    }

    pub fn delete_prompt(&self) -> Option<&'static str> {
        self.delete.prompt()
    }

    pub fn decline_delete(&mut self) {
        self.delete.decline();
    }

    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.delete.confirm() else {
            return;
        };

        self.busy = true;
        self.error = None;
        let result = self.store.delete_responsavel(id).await;
        self.busy = false;
        if !self.guard.is_current() {
            return;
        }

        match result {
            Ok(()) => {
                tracing::info!(responsavel_id = id, "Responsável deleted");
                self.load().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, responsavel_id = id, "Failed to delete responsável");
                self.error = Some(if err.is_dependent_records() {
                    messages::DELETE_RESPONSAVEL_HAS_DEPENDENTS
                } else {
                    messages::DELETE_RESPONSAVEL_FAILED
                });
            }
        }
    }
}

//! "Regionais": list, add, inline rename and guarded deletion.

use std::sync::Arc;

use plano_core::messages;
use plano_core::payload::RegionalPayload;
use plano_core::types::DbId;
use plano_core::validation::validate_payload;

use crate::confirm::Confirmation;
use crate::guard::ViewGuard;
use crate::records::Regional;
use crate::store::PlanStore;

/// Row currently in inline edit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionalEdit {
    pub id: DbId,
    pub nome_regional: String,
}

pub struct RegionaisScreen {
    store: Arc<dyn PlanStore>,
    guard: ViewGuard,
    regionais: Vec<Regional>,
    /// Text of the "add" input.
    pub new_name: String,
    editing: Option<RegionalEdit>,
    delete: Confirmation<DbId>,
    error: Option<&'static str>,
    busy: bool,
}

impl RegionaisScreen {
    pub fn new(store: Arc<dyn PlanStore>, guard: ViewGuard) -> Self {
        Self {
            store,
            guard,
            regionais: Vec::new(),
            new_name: String::new(),
            editing: None,
            delete: Confirmation::new(messages::CONFIRM_DELETE_REGIONAL),
            error: None,
            busy: false,
        }
    }

    pub fn regionais(&self) -> &[Regional] {
        &self.regionais
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub async fn load(&mut self) {
        let result = self.store.list_regionais().await;
        if !self.guard.is_current() {
            return;
        }

        match result {
            Ok(regionais) => self.regionais = regionais,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load regionais");
                self.error = Some(messages::LOAD_REGIONAIS_FAILED);
            }
        }
    }

    /// Add a regional named [`new_name`](Self::new_name). Blank names never
    /// reach the store.
    pub async fn add(&mut self) -> bool {
        let payload = RegionalPayload {
            nome_regional: self.new_name.trim().to_string(),
        };
        if validate_payload(&payload).is_err() {
            self.error = Some(messages::FILL_ALL_FIELDS);
            return false;
        }

        self.busy = true;
        self.error = None;
        let result = self.store.create_regional(&payload).await;
        self.busy = false;
        if !self.guard.is_current() {
            return result.is_ok();
        }

        match result {
            Ok(regional) => {
                tracing::info!(regional_id = regional.id, "Regional created");
                self.new_name.clear();
                self.load().await;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to create regional");
                self.error = Some(messages::CREATE_REGIONAL_FAILED);
                false
            }
        }
    }

    // ---- inline edit ----

    pub fn editing(&self) -> Option<&RegionalEdit> {
        self.editing.as_ref()
    }

    pub fn start_edit(&mut self, id: DbId) {
        if let Some(regional) = self.regionais.iter().find(|r| r.id == id) {
            self.editing = Some(RegionalEdit {
                id,
                nome_regional: regional.nome_regional.clone(),
            });
        }
    }

    pub fn set_edit_name(&mut self, name: impl Into<String>) {
        if let Some(edit) = self.editing.as_mut() {
            edit.nome_regional = name.into();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Save the row in edit mode. Blank names never reach the store.
    pub async fn save_edit(&mut self) -> bool {
        let Some(edit) = self.editing.clone() else {
            return false;
        };
        let payload = RegionalPayload {
            nome_regional: edit.nome_regional.trim().to_string(),
        };
        if validate_payload(&payload).is_err() {
            self.error = Some(messages::FILL_ALL_FIELDS);
            return false;
        }

        self.busy = true;
        self.error = None;
        let result = self.store.update_regional(edit.id, &payload).await;
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
                tracing::warn!(error = %err, regional_id = edit.id, "Failed to update regional");
                self.error = Some(messages::UPDATE_REGIONAL_FAILED);
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

    /// A regional still referenced by responsáveis stays, with a message
    /// saying so.
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.delete.confirm() else {
            return;
        };

        self.busy = true;
        self.error = None;
        let result = self.store.delete_regional(id).await;
        self.busy = false;
        if !self.guard.is_current() {
            return;
        }

        match result {
            Ok(()) => {
                tracing::info!(regional_id = id, "Regional deleted");
                self.load().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, regional_id = id, "Failed to delete regional");
                self.error = Some(if err.is_dependent_records() {
                    messages::DELETE_REGIONAL_HAS_DEPENDENTS
                } else {
                    messages::DELETE_REGIONAL_FAILED
                });
            }
        }
    }
}

//! "Plano Anual de Segurança": filtered listing, form host and deletion.

use std::sync::Arc;

use plano_core::filter::{options_for_regional, PlanoFilter};
use plano_core::messages;
use plano_core::status::PlanoStatus;
use plano_core::types::DbId;

use crate::confirm::Confirmation;
use crate::guard::ViewGuard;
use crate::records::{PlanoAnual, Regional, Responsavel};
use crate::screens::plano_form::PlanoForm;
use crate::store::PlanStore;

pub struct PlanoManager {
    store: Arc<dyn PlanStore>,
    guard: ViewGuard,
    planos: Vec<PlanoAnual>,
    regionais: Vec<Regional>,
    responsaveis: Vec<Responsavel>,
    filter: PlanoFilter,
    form: Option<PlanoForm>,
    delete: Confirmation<DbId>,
    error: Option<&'static str>,
    busy: bool,
}

impl PlanoManager {
    pub fn new(store: Arc<dyn PlanStore>, guard: ViewGuard) -> Self {
        Self {
            store,
            guard,
            planos: Vec::new(),
            regionais: Vec::new(),
            responsaveis: Vec::new(),
            filter: PlanoFilter::default(),
            form: None,
            delete: Confirmation::new(messages::CONFIRM_DELETE_PLANO),
            error: None,
            busy: false,
        }
    }

    pub fn planos(&self) -> &[PlanoAnual] {
        &self.planos
    }

    pub fn regionais(&self) -> &[Regional] {
        &self.regionais
    }

    pub fn responsaveis(&self) -> &[Responsavel] {
        &self.responsaveis
    }

    pub fn filter(&self) -> &PlanoFilter {
        &self.filter
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Responsáveis offered by the responsável filter.
    pub fn responsavel_filter_options(&self) -> Vec<&Responsavel> {
        options_for_regional(&self.responsaveis, self.filter.regional_id)
    }

    // ---- loading ----

    /// Load the pickers' reference data, then the filtered listing.
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
                self.reload_planos().await;
            }
            (Err(err), _) | (_, Err(err)) => {
                tracing::warn!(error = %err, "Failed to load reference data");
                self.error = Some(messages::LOAD_DATA_FAILED);
            }
        }
    }

    /// Re-run the listing for the current filter. On failure the rows
    /// already on screen stay; a later success clears the message.
    pub async fn reload_planos(&mut self) {
        let result = self.store.list_planos(&self.filter).await;
        if !self.guard.is_current() {
            return;
        }

        match result {
            Ok(planos) => {
                self.planos = planos;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, filter = ?self.filter, "Failed to load plan actions");
                self.error = Some(messages::LOAD_PLANOS_FAILED);
            }
        }
    }

    // ---- filters ----

    /// Also clears the responsável filter.
    pub async fn filter_by_regional(&mut self, regional_id: Option<DbId>) {
        self.filter.select_regional(regional_id);
        self.reload_planos().await;
    }

    pub async fn filter_by_responsavel(&mut self, responsavel_id: Option<DbId>) {
        self.filter.select_responsavel(responsavel_id);
        self.reload_planos().await;
    }

    pub async fn filter_by_status(&mut self, status: Option<PlanoStatus>) {
        self.filter.select_status(status);
        self.reload_planos().await;
    }

    pub async fn clear_filters(&mut self) {
        self.filter.clear();
        self.reload_planos().await;
    }

    // ---- form ----

    pub fn form(&self) -> Option<&PlanoForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut PlanoForm> {
        self.form.as_mut()
    }

    pub fn open_new(&mut self) {
        self.form = Some(PlanoForm::new());
    }

    /// Open the form on a listed row. Unknown ids are ignored.
    pub fn open_edit(&mut self, id: DbId) {
        if let Some(plano) = self.planos.iter().find(|p| p.id == id) {
            self.form = Some(PlanoForm::edit(plano));
        }
    }

    /// Discard the form and its input.
    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    /// Submit the open form; on success close it and reload the listing.
    pub async fn submit_form(&mut self) -> bool {
        let Some(form) = self.form.as_mut() else {
            return false;
        };
        if !form.submit(self.store.as_ref()).await {
            return false;
        }
        if !self.guard.is_current() {
            return true;
        }

        self.form = None;
        self.reload_planos().await;
        true
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
        let result = self.store.delete_plano(id).await;
        self.busy = false;
        if !self.guard.is_current() {
            return;
        }

        match result {
            Ok(()) => {
                tracing::info!(plano_id = id, "Plan action deleted");
                self.reload_planos().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, plano_id = id, "Failed to delete plan action");
                self.error = Some(messages::DELETE_PLANO_FAILED);
            }
        }
    }
}

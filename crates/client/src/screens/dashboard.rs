use std::sync::Arc;

use plano_core::dashboard::{StatusBucket, StatusSummary};
use plano_core::filter::PlanoFilter;
use plano_core::messages;

use crate::guard::ViewGuard;
use crate::store::PlanStore;

/// "Indicadores": status counts and shares over every plan action.
pub struct DashboardScreen {
    store: Arc<dyn PlanStore>,
    guard: ViewGuard,
    loading: bool,
    summary: StatusSummary,
    error: Option<&'static str>,
}

impl DashboardScreen {
    /// Starts in the loading state with zeroed stats.
    pub fn new(store: Arc<dyn PlanStore>, guard: ViewGuard) -> Self {
        Self {
            store,
            guard,
            loading: true,
            summary: StatusSummary::default(),
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn summary(&self) -> &StatusSummary {
        &self.summary
    }

    pub fn buckets(&self) -> [StatusBucket; 4] {
        self.summary.buckets()
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub async fn load(&mut self) {
        self.loading = true;
        let result = self.store.list_planos(&PlanoFilter::default()).await;
        if !self.guard.is_current() {
            return;
        }

        match result {
            Ok(planos) => {
                self.summary = StatusSummary::from_statuses(planos.iter().map(|p| p.status));
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load dashboard stats");
                self.error = Some(messages::LOAD_STATS_FAILED);
            }
        }
        self.loading = false;
    }
}

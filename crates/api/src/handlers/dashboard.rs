//! Handler for the dashboard aggregate.

use axum::extract::State;
use axum::Json;
use plano_core::dashboard::{StatusBucket, StatusSummary};
use plano_db::repositories::PlanoAnualRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Status aggregate over every plan action.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    #[serde(flatten)]
    pub counts: StatusSummary,
    pub buckets: [StatusBucket; 4],
    pub completion_rate: u32,
    pub in_progress_rate: u32,
    pub late_rate: u32,
}

impl From<StatusSummary> for DashboardSummary {
    fn from(counts: StatusSummary) -> Self {
        Self {
            buckets: counts.buckets(),
            completion_rate: counts.completion_rate(),
            in_progress_rate: counts.in_progress_rate(),
            late_rate: counts.late_rate(),
            counts,
        }
    }
}

/// GET /api/v1/dashboard/summary
pub async fn summary(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    let statuses = PlanoAnualRepo::list_statuses(&state.pool).await?;
    let counts = StatusSummary::from_statuses(statuses);
    Ok(Json(DataResponse {
        data: counts.into(),
    }))
}

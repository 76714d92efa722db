//! Handlers for the `/plano-anual` resource.
//!
//! Reads always carry the current `nome_regional` and `nome_responsavel`.
//! Writes are stamped by the database: `data_atualizacao` on every write and
//! `created_by` (from the bearer token) on insert only.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use plano_core::error::CoreError;
use plano_core::filter::PlanoFilter;
use plano_core::payload::PlanoPayload;
use plano_core::types::DbId;
use plano_core::validation::validate_payload;
use plano_db::models::plano_anual::PlanoAnualWithNames;
use plano_db::repositories::PlanoAnualRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "PlanoAnual",
        id,
    })
}

async fn fetch_with_names(state: &AppState, id: DbId) -> AppResult<PlanoAnualWithNames> {
    PlanoAnualRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /api/v1/plano-anual?regional_id=&responsavel_id=&status=
///
/// Conjunction of the supplied filters, latest `prazo_fim` first.
pub async fn list_planos(
    _user: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<PlanoFilter>,
) -> AppResult<impl IntoResponse> {
    let planos = PlanoAnualRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: planos }))
}

/// GET /api/v1/plano-anual/{id}
pub async fn get_plano(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(plano_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let plano = fetch_with_names(&state, plano_id).await?;
    Ok(Json(DataResponse { data: plano }))
}

/// POST /api/v1/plano-anual
pub async fn create_plano(
    user: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<PlanoPayload>,
) -> AppResult<impl IntoResponse> {
    validate_payload(&input)?;
    input.normalize();

    let created = PlanoAnualRepo::create(&state.pool, &input, user.user_id).await?;
    let plano = fetch_with_names(&state, created.id).await?;

    tracing::info!(
        plano_id = created.id,
        regional_id = created.regional_id,
        status = %created.status,
        user_id = user.user_id,
        "Plan action created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: plano })))
}

/// PUT /api/v1/plano-anual/{id}
///
/// Replaces every editable field. `created_by` is left untouched.
pub async fn update_plano(
    user: AuthUser,
    State(state): State<AppState>,
    Path(plano_id): Path<DbId>,
    Json(mut input): Json<PlanoPayload>,
) -> AppResult<impl IntoResponse> {
    validate_payload(&input)?;
    input.normalize();

    PlanoAnualRepo::update(&state.pool, plano_id, &input)
        .await?
        .ok_or_else(|| not_found(plano_id))?;
    let plano = fetch_with_names(&state, plano_id).await?;

    tracing::info!(plano_id, status = %input.status, user_id = user.user_id, "Plan action updated");

    Ok(Json(DataResponse { data: plano }))
}

/// DELETE /api/v1/plano-anual/{id}
///
/// Hard delete; nothing references a plan action.
pub async fn delete_plano(
    user: AuthUser,
    State(state): State<AppState>,
    Path(plano_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !PlanoAnualRepo::delete(&state.pool, plano_id).await? {
        return Err(not_found(plano_id));
    }

    tracing::info!(plano_id, user_id = user.user_id, "Plan action deleted");

    Ok(StatusCode::NO_CONTENT)
}

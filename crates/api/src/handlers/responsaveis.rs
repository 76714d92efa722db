//! Handlers for the `/responsaveis` resource.
//!
//! Listing and single reads carry the owning regional's current name.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use plano_core::error::CoreError;
use plano_core::payload::ResponsavelPayload;
use plano_core::types::DbId;
use plano_core::validation::validate_payload;
use plano_db::repositories::ResponsavelRepo;

use crate::error::{delete_error, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/responsaveis
pub async fn list_responsaveis(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let responsaveis = ResponsavelRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: responsaveis }))
}

/// POST /api/v1/responsaveis
///
/// Answers with the joined row so the caller sees `nome_regional` right away.
pub async fn create_responsavel(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ResponsavelPayload>,
) -> AppResult<impl IntoResponse> {
    validate_payload(&input)?;

    let created = ResponsavelRepo::create(&state.pool, &input, user.user_id).await?;
    let responsavel = ResponsavelRepo::find_by_id(&state.pool, created.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Responsavel",
            id: created.id,
        }))?;

    tracing::info!(
        responsavel_id = created.id,
        regional_id = created.regional_id,
        user_id = user.user_id,
        "Responsável created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: responsavel })))
}

/// PUT /api/v1/responsaveis/{id}
pub async fn update_responsavel(
    user: AuthUser,
    State(state): State<AppState>,
    Path(responsavel_id): Path<DbId>,
    Json(input): Json<ResponsavelPayload>,
) -> AppResult<impl IntoResponse> {
    validate_payload(&input)?;

    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Responsavel",
            id: responsavel_id,
        })
    };

    ResponsavelRepo::update(&state.pool, responsavel_id, &input)
        .await?
        .ok_or_else(not_found)?;
    let responsavel = ResponsavelRepo::find_by_id(&state.pool, responsavel_id)
        .await?
        .ok_or_else(not_found)?;

    tracing::info!(responsavel_id, user_id = user.user_id, "Responsável updated");

    Ok(Json(DataResponse { data: responsavel }))
}

/// DELETE /api/v1/responsaveis/{id}
///
/// Refused with 409 `DEPENDENT_RECORDS` while any plan action references it.
pub async fn delete_responsavel(
    user: AuthUser,
    State(state): State<AppState>,
    Path(responsavel_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ResponsavelRepo::delete(&state.pool, responsavel_id)
        .await
        .map_err(delete_error("Responsavel"))?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Responsavel",
            id: responsavel_id,
        }));
    }

    tracing::info!(responsavel_id, user_id = user.user_id, "Responsável deleted");

    Ok(StatusCode::NO_CONTENT)
}

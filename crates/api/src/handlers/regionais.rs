//! Handlers for the `/regionais` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use plano_core::error::CoreError;
use plano_core::payload::RegionalPayload;
use plano_core::types::DbId;
use plano_core::validation::validate_payload;
use plano_db::repositories::RegionalRepo;

use crate::error::{delete_error, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/regionais
///
/// All regionais ordered by name.
pub async fn list_regionais(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let regionais = RegionalRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: regionais }))
}

/// POST /api/v1/regionais
pub async fn create_regional(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<RegionalPayload>,
) -> AppResult<impl IntoResponse> {
    validate_payload(&input)?;

    let regional = RegionalRepo::create(&state.pool, &input, user.user_id).await?;

    tracing::info!(
        regional_id = regional.id,
        user_id = user.user_id,
        "Regional created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: regional })))
}

/// PUT /api/v1/regionais/{id}
pub async fn update_regional(
    user: AuthUser,
    State(state): State<AppState>,
    Path(regional_id): Path<DbId>,
    Json(input): Json<RegionalPayload>,
) -> AppResult<impl IntoResponse> {
    validate_payload(&input)?;

    let regional = RegionalRepo::update(&state.pool, regional_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Regional",
            id: regional_id,
        }))?;

    tracing::info!(regional_id, user_id = user.user_id, "Regional updated");

    Ok(Json(DataResponse { data: regional }))
}

/// DELETE /api/v1/regionais/{id}
///
/// Refused with 409 `DEPENDENT_RECORDS` while any responsável or plan action
/// references the regional.
pub async fn delete_regional(
    user: AuthUser,
    State(state): State<AppState>,
    Path(regional_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = RegionalRepo::delete(&state.pool, regional_id)
        .await
        .map_err(delete_error("Regional"))?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Regional",
            id: regional_id,
        }));
    }

    tracing::info!(regional_id, user_id = user.user_id, "Regional deleted");

    Ok(StatusCode::NO_CONTENT)
}

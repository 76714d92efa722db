use axum::routing::{get, put};
use axum::Router;

use crate::handlers::responsaveis;
use crate::state::AppState;

/// Routes mounted at `/responsaveis`.
///
/// ```text
/// GET    /       -> list_responsaveis
/// POST   /       -> create_responsavel
/// PUT    /{id}   -> update_responsavel
/// DELETE /{id}   -> delete_responsavel
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(responsaveis::list_responsaveis).post(responsaveis::create_responsavel),
        )
        .route(
            "/{id}",
            put(responsaveis::update_responsavel).delete(responsaveis::delete_responsavel),
        )
}

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::regionais;
use crate::state::AppState;

/// Routes mounted at `/regionais`.
///
/// ```text
/// GET    /       -> list_regionais
/// POST   /       -> create_regional
/// PUT    /{id}   -> update_regional
/// DELETE /{id}   -> delete_regional
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(regionais::list_regionais).post(regionais::create_regional),
        )
        .route(
            "/{id}",
            put(regionais::update_regional).delete(regionais::delete_regional),
        )
}

use axum::routing::get;
use axum::Router;

use crate::handlers::plano_anual;
use crate::state::AppState;

/// Routes mounted at `/plano-anual`.
///
/// ```text
/// GET    /       -> list_planos (?regional_id=&responsavel_id=&status=)
/// POST   /       -> create_plano
/// GET    /{id}   -> get_plano
/// PUT    /{id}   -> update_plano
/// DELETE /{id}   -> delete_plano
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(plano_anual::list_planos).post(plano_anual::create_plano),
        )
        .route(
            "/{id}",
            get(plano_anual::get_plano)
                .put(plano_anual::update_plano)
                .delete(plano_anual::delete_plano),
        )
}

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod plano_anual;
pub mod regionais;
pub mod responsaveis;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/register                      register (public)
/// /auth/login                         login (public)
/// /auth/refresh                       refresh (public)
/// /auth/logout                        logout (requires auth)
/// /auth/me                            current actor (requires auth)
///
/// /regionais                          list, create
/// /regionais/{id}                     update, delete
///
/// /responsaveis                       list, create
/// /responsaveis/{id}                  update, delete
///
/// /plano-anual                        filtered list, create
/// /plano-anual/{id}                   get, update, delete
///
/// /dashboard/summary                  status aggregate
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/regionais", regionais::router())
        .nest("/responsaveis", responsaveis::router())
        .nest("/plano-anual", plano_anual::router())
        .nest("/dashboard", dashboard::router())
}

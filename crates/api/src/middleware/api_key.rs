//! Public API key check.
//!
//! Every `/api/v1` request must carry the anonymous key in an `apikey`
//! header. The key identifies the client application, not the user.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use plano_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the anonymous key.
pub const API_KEY_HEADER: &str = "apikey";

/// Reject the request with 401 unless `apikey` matches the configured key.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if key == state.config.anon_key => Ok(next.run(request).await),
        Some(_) => Err(AppError::Core(CoreError::Unauthorized(
            "Invalid API key".into(),
        ))),
        None => Err(AppError::Core(CoreError::Unauthorized(
            "Missing apikey header".into(),
        ))),
    }
}

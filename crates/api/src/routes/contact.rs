use axum::routing::{get, put};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// POST /              -> create
/// GET  /              -> list (admin)
/// GET  /stats         -> stats (admin)
/// PUT  /{id}/status   -> update_status (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::list).post(contact::create))
        .route("/stats", get(contact::stats))
        .route("/{id}/status", put(contact::update_status))
}

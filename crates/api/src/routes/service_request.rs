use axum::routing::get;
use axum::Router;

use crate::handlers::service_request;
use crate::state::AppState;

/// Routes mounted at `/service-requests`.
///
/// The single path segment is a case id for GET and a numeric row id for
/// PUT; axum requires one parameter name per segment.
///
/// ```text
/// GET  /        -> list (admin)
/// POST /        -> create
/// GET  /{id}    -> get_by_case_id
/// PUT  /{id}    -> update (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(service_request::list).post(service_request::create))
        .route(
            "/{id}",
            get(service_request::get_by_case_id).put(service_request::update),
        )
}

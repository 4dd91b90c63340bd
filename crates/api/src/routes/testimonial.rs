use axum::routing::{get, put};
use axum::Router;

use crate::handlers::testimonial;
use crate::state::AppState;

/// Routes mounted at `/testimonials`.
///
/// ```text
/// GET    /      -> list_active
/// POST   /      -> create
/// PUT    /{id}  -> update (admin)
/// DELETE /{id}  -> deactivate (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(testimonial::list_active).post(testimonial::create))
        .route("/{id}", put(testimonial::update).delete(testimonial::deactivate))
}

use axum::routing::get;
use axum::Router;

use crate::handlers::testimonial;
use crate::state::AppState;

/// Staff views mounted at `/admin`. Every handler requires the admin role.
///
/// ```text
/// GET /testimonials -> list_all
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/testimonials", get(testimonial::list_all))
}

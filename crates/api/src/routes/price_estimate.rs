use axum::routing::{get, post};
use axum::Router;

use crate::handlers::price_estimate;
use crate::state::AppState;

/// Routes mounted at `/price-estimate`.
///
/// ```text
/// POST /              -> estimate
/// GET  /pricing-info  -> pricing_info
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(price_estimate::estimate))
        .route("/pricing-info", get(price_estimate::pricing_info))
}

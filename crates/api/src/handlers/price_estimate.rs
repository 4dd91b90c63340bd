//! Handlers for `/price-estimate`.

use axum::extract::State;
use axum::Json;
use datalab_core::pricing::{PriceEstimate, PricingTable};
use serde::Deserialize;

use crate::state::AppState;

/// Quote request. Codes are free-form; unknown ones price at the defaults.
#[derive(Debug, Deserialize)]
pub struct PriceEstimateRequest {
    pub device_type: String,
    pub problem_type: String,
    pub urgency: String,
}

/// POST /api/price-estimate
pub async fn estimate(
    State(state): State<AppState>,
    Json(input): Json<PriceEstimateRequest>,
) -> Json<PriceEstimate> {
    let estimate = state.config.estimation.pricing.estimate_price(
        &input.device_type,
        &input.problem_type,
        &input.urgency,
    );

    if !estimate.breakdown.defaults_applied.is_empty() {
        tracing::debug!(
            defaults = ?estimate.breakdown.defaults_applied,
            device_type = %input.device_type,
            problem_type = %input.problem_type,
            urgency = %input.urgency,
            "Price estimate used fallback values",
        );
    }

    Json(estimate)
}

/// GET /api/price-estimate/pricing-info
///
/// The active pricing table, for rendering the quote form.
pub async fn pricing_info(State(state): State<AppState>) -> Json<PricingTable> {
    Json(state.config.estimation.pricing.clone())
}

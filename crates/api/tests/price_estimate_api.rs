mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn estimate_multiplies_all_factors(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/price-estimate",
        json!({ "device_type": "ssd", "problem_type": "physical", "urgency": "urgent" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["estimated_price"], 337.5);
    assert_eq!(json["currency"], "₾");
    assert_eq!(json["breakdown"]["base_price"], 150.0);
    assert_eq!(json["breakdown"]["problem_multiplier"], 1.5);
    assert_eq!(json["breakdown"]["urgency_multiplier"], 1.5);
    assert_eq!(json["breakdown"]["defaults_applied"], json!([]));
    assert!(json["timeframe"]["en"].is_string());
    assert!(json["timeframe"]["ka"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_codes_fall_back_and_are_reported(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/price-estimate",
        json!({ "device_type": "tape", "problem_type": "logical", "urgency": "whenever" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["estimated_price"], 100.0);
    assert_eq!(
        json["breakdown"]["defaults_applied"],
        json!(["device_type", "urgency"])
    );
    assert_eq!(json["breakdown"]["device_type"], "tape");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pricing_info_exposes_active_table(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/price-estimate/pricing-info").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["base_prices"]["raid"], 300.0);
    assert_eq!(json["problem_multipliers"]["fire"], 2.5);
    assert_eq!(json["urgency_multipliers"]["emergency"], 2.0);
    assert_eq!(json["currency"], "₾");
}

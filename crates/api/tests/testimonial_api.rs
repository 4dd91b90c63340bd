mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, delete, delete_auth, get, get_auth, post_json, put_json_auth};
use serde_json::{json, Value};
use sqlx::PgPool;

fn submission(name_en: &str) -> Value {
    json!({
        "name": "მარიამი",
        "name_en": name_en,
        "position": "ფოტოგრაფი",
        "position_en": "Photographer",
        "text_ka": "ყველა ფოტო დაბრუნდა, გმადლობთ!",
        "text_en": "Every photo came back, thank you!",
    })
}

async fn create(app: axum::Router, name_en: &str) -> Value {
    let response = post_json(app, "/api/testimonials", submission(name_en)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn created_testimonial_is_listed_with_default_rating(pool: PgPool) {
    let app = common::build_test_app(pool);
    let created = create(app.clone(), "Mariam").await;
    assert_eq!(created["rating"], 5);
    assert_eq!(created["is_active"], true);

    let list = body_json(get(app, "/api/testimonials").await).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name_en"], "Mariam");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn out_of_range_rating_is_rejected(pool: PgPool) {
    let mut body = submission("Mariam");
    body["rating"] = json!(6);
    let response = post_json(common::build_test_app(pool), "/api/testimonials", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deactivated_testimonials_leave_the_public_list(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();
    let hidden = create(app.clone(), "Hidden").await;
    create(app.clone(), "Visible").await;
    let uri = format!("/api/testimonials/{}", hidden["id"]);

    let response = delete(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    // Repeating is harmless.
    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let public = body_json(get(app.clone(), "/api/testimonials").await).await;
    assert_eq!(public.as_array().unwrap().len(), 1);
    assert_eq!(public[0]["name_en"], "Visible");

    let all = body_json(get_auth(app.clone(), "/api/admin/testimonials", &token).await).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let response = delete_auth(app, "/api/testimonials/999999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn staff_can_edit_and_reactivate(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();
    let created = create(app.clone(), "Eka").await;
    let uri = format!("/api/testimonials/{}", created["id"]);
    delete_auth(app.clone(), &uri, &token).await;

    let response = put_json_auth(
        app.clone(),
        &uri,
        json!({ "is_active": true, "rating": 4 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["is_active"], true);
    assert_eq!(updated["rating"], 4);
    assert_eq!(updated["name_en"], "Eka");

    let response = put_json_auth(app.clone(), &uri, json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No valid fields to update");

    let response = put_json_auth(
        app,
        "/api/testimonials/999999",
        json!({ "rating": 3 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

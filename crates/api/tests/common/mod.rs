#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use datalab_api::auth::jwt::{generate_access_token, JwtConfig};
use datalab_api::auth::password::hash_password;
use datalab_api::config::{AdminCredentials, ServerConfig};
use datalab_api::router::build_app_router;
use datalab_api::state::AppState;
use datalab_core::case_id::{CaseIdFormat, DEFAULT_MAX_ATTEMPTS};
use datalab_core::config::EstimationConfig;
use datalab_core::roles::ROLE_ADMIN;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery-staple";
pub const CORS_ORIGIN: &str = "http://localhost:3000";

/// Test configuration with a known admin password and the built-in tables.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![CORS_ORIGIN.to_string()],
        request_timeout_secs: 30,
        jwt: test_jwt_config(),
        admin: AdminCredentials {
            username: ADMIN_USERNAME.to_string(),
            password_hash: hash_password(ADMIN_PASSWORD).unwrap(),
        },
        case_id_format: CaseIdFormat::default(),
        case_id_max_attempts: DEFAULT_MAX_ATTEMPTS,
        estimation: EstimationConfig::default(),
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
        access_token_expiry_mins: 60,
    }
}

/// The production router and middleware stack over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState::new(pool, test_config()))
}

/// A valid admin bearer token for [`test_config`].
pub fn admin_token() -> String {
    generate_access_token(ADMIN_USERNAME, ROLE_ADMIN, &test_jwt_config()).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, None, Some(token)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body), None).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PUT, uri, Some(body), Some(token)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, None).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, None, Some(token)).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

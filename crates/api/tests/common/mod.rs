#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use impactbridge_api::config::{LogFormat, ServerConfig};
use impactbridge_api::router::build_app_router;
use impactbridge_api::state::AppState;
use impactbridge_db::DbPool;

/// A fresh in-memory database with migrations applied.
pub async fn test_pool() -> DbPool {
    let pool = impactbridge_db::create_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    impactbridge_db::run_migrations(&pool)
        .await
        .expect("migrations apply");
    pool
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        max_body_bytes: 16 * 1024 * 1024,
        seed_sample_data: false,
        log_format: LogFormat::Text,
    }
}

/// The production router over the given pool.
pub fn build_test_app(pool: DbPool) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// POST a urlencoded form built from `fields`.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response {
    let body = serde_urlencoded::to_string(fields).unwrap();

    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response) -> &str {
    response.headers()["location"].to_str().unwrap()
}

/// Fields of a valid crisis report.
pub fn valid_case<'a>(title: &'a str) -> Vec<(&'static str, &'a str)> {
    vec![
        ("title", title),
        ("description", "Heavy rainfall caused river overflow in the lower town."),
        ("severity", "5"),
        ("urgency", "5"),
        ("people_affected", "850"),
        ("available_resources", "12"),
        ("required_skill", "Emergency Medicine"),
    ]
}

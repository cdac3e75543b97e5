#![allow(dead_code)]

use std::num::NonZeroU32;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use luminar_backend::config::app_config::AppConfig;
use luminar_backend::{build_router, db, AppState, DbPool};

pub const ADMIN_TOKEN: &str = "test-inbox-token";

/// Config pointing at a private in-memory database with the inbox enabled
/// and a quota high enough not to interfere with ordinary tests.
pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: ":memory:".to_string(),
        admin_token: Some(ADMIN_TOKEN.to_string()),
        contact_rate_limit_per_minute: NonZeroU32::new(1_000).unwrap(),
        ..AppConfig::default()
    }
}

pub fn build_test_app(config: AppConfig) -> Router {
    build_test_app_with_pool(config).0
}

/// Also hands back the pool so a test can tamper with the database.
pub fn build_test_app_with_pool(config: AppConfig) -> (Router, DbPool) {
    let pool = db::build_pool(&config.database_url).expect("in-memory pool");
    db::run_migrations(&pool).expect("migrations");
    let app = build_router(Arc::new(AppState::new(pool.clone(), config)));
    (app, pool)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.expect("router is infallible")
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_from(app: &Router, body: Value, forwarded_for: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", forwarded_for)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_raw(app: &Router, content_type: Option<&str>, body: &str) -> Response<Body> {
    let mut builder = Request::builder().method(Method::POST).uri("/api/contact");
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

pub async fn get(app: &Router, uri: &str, bearer: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("readable body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

pub fn valid_submission() -> Value {
    serde_json::json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "projectType": "Product launch",
        "message": "We want a hero video that scrubs with the scroll."
    })
}

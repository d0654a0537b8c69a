#![allow(dead_code)]

//! Test infrastructure for wig-server API tests

use wig_server::api::oauth::provider_client::OAuthClient;
use wig_server::{AppState, Config};

use wig_auth::TokenService;

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use sqlx::SqlitePool;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-32-bytes";
pub const HOUR_MS: i64 = 3_600_000;

fn base64(bytes: &[u8]) -> String {
    use base64::Engine as _;
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/wig-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

fn test_config() -> Config {
    Config {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        database_path: ":memory:".to_string(),
        jwt_secret: base64(TEST_SECRET),
        jwt_expiration_ms: HOUR_MS,
        frontend_url: "http://localhost:3000".to_string(),
        public_base_url: "http://localhost:8080".to_string(),
        log_level: "info".to_string(),
        log_colored: false,
        google: None,
        kakao: None,
        naver: None,
    }
}

/// Create AppState for testing (no OAuth providers configured)
pub async fn create_test_app_state() -> AppState {
    let config = test_config();
    let pool = create_test_pool().await;
    let token_service =
        Arc::new(TokenService::new(&config.jwt_secret, config.jwt_expiration_ms).unwrap());
    let oauth = Arc::new(OAuthClient::new(&config));

    AppState {
        pool,
        token_service,
        oauth,
        frontend_url: config.frontend_url.clone(),
    }
}

/// Build a JSON POST request
pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

/// Build a GET request with an optional bearer token
pub fn get_with_bearer(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Collect a response body into JSON
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

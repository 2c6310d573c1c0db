//! Shared helpers for the handler and service tests.

use crate::server::{create_router, AppState};
use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use lib_core::{create_memory_pool, Config};
use serde_json::Value;

pub const TEST_SECRET: &str = "test-secret-key-must-be-at-least-32-characters-long!";

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        jwt_expiration_hours: 1,
    }
}

/// Fresh state over its own in-memory database.
pub async fn test_state() -> AppState {
    let pool = create_memory_pool()
        .await
        .expect("Failed to create test database");
    AppState::new(pool, test_config())
}

pub fn test_app(state: AppState) -> Router {
    create_router(state, &[])
}

pub fn json_request(method: &str, uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Register through the service layer and return a token for the new user.
pub async fn registered_token(state: &AppState, username: &str, password: &str) -> (i64, String) {
    let auth = state.auth();
    let user = auth.register(username, password).await.unwrap();
    let token = auth.login(username, password).await.unwrap();
    (user.id, token)
}

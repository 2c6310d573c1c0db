//! # Create Post Tests

use super::*;
use crate::test_utils::TEST_SECRET;
use chrono::Duration;
use lib_auth::TokenService;
use lib_core::dto::ErrorResponse;

#[tokio::test]
async fn test_create_post_success() {
    // Arrange
    let state = test_state().await;
    let (user_id, token) = registered_token(&state, "penulis", "password123").await;
    let app = test_app(state);

    // Act
    let response = app
        .oneshot(json_request(
            "POST",
            "/posts",
            json!({ "title": "Judul Postingan", "content": "Isi postingan yang panjang" }),
            Some(&token),
        ))
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Judul Postingan");
    assert_eq!(body["content"], "Isi postingan yang panjang");
    assert_eq!(body["author"]["id"], user_id);
    assert_eq!(body["author"]["username"], "penulis");
    assert!(body["author"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_create_post_without_token() {
    let app = test_app(test_state().await);

    let response = app
        .oneshot(json_request(
            "POST",
            "/posts",
            json!({ "title": "Judul Postingan", "content": "Isi" }),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_post_guard_runs_before_validation() {
    let app = test_app(test_state().await);

    // Invalid body and no token: the guard answers first.
    let response = app
        .oneshot(json_request("POST", "/posts", json!({ "title": "a" }), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_post_with_expired_token() {
    let state = test_state().await;
    let (user_id, _) = registered_token(&state, "penulis", "password123").await;
    let expired = TokenService::new(TEST_SECRET, Duration::seconds(-120))
        .issue(user_id, "penulis")
        .unwrap();
    let app = test_app(state);

    let response = app
        .oneshot(json_request(
            "POST",
            "/posts",
            json!({ "title": "Judul Postingan", "content": "Isi" }),
            Some(&expired),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_post_for_missing_user() {
    let state = test_state().await;
    let token = state.tokens.issue(9999, "ghost").unwrap();
    let app = test_app(state);

    let response = app
        .oneshot(json_request(
            "POST",
            "/posts",
            json!({ "title": "Judul Postingan", "content": "Isi" }),
            Some(&token),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_post_reports_every_invalid_field() {
    // Arrange
    let state = test_state().await;
    let (_, token) = registered_token(&state, "penulis", "password123").await;
    let app = test_app(state);

    // Act
    let response = app
        .oneshot(json_request("POST", "/posts", json!({ "title": "a" }), Some(&token)))
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = serde_json::from_value(body_json(response).await).unwrap();
    assert!(body.message.iter().any(|m| m.contains("title")));
    assert!(body.message.iter().any(|m| m.contains("content")));
}

#[tokio::test]
async fn test_create_post_title_too_short() {
    let state = test_state().await;
    let (_, token) = registered_token(&state, "penulis", "password123").await;
    let app = test_app(state);

    let response = app
        .oneshot(json_request(
            "POST",
            "/posts",
            json!({ "title": "abcd", "content": "Isi" }),
            Some(&token),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(
        body.message,
        vec!["title must be longer than or equal to 5 characters".to_string()]
    );
}

#[tokio::test]
async fn test_create_post_with_malformed_token() {
    let state = test_state().await;
    registered_token(&state, "penulis", "password123").await;
    let app = test_app(state);

    let response = app
        .oneshot(json_request(
            "POST",
            "/posts",
            json!({ "title": "Judul Postingan", "content": "Isi" }),
            Some("garbage.token.here"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_post_empty_content() {
    let state = test_state().await;
    let (_, token) = registered_token(&state, "penulis", "password123").await;
    let app = test_app(state);

    let response = app
        .oneshot(json_request(
            "POST",
            "/posts",
            json!({ "title": "Judul Postingan", "content": "" }),
            Some(&token),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(body.message, vec!["content should not be empty".to_string()]);
}

#[tokio::test]
async fn test_create_post_wrong_field_types_report_each_field() {
    // Arrange
    let state = test_state().await;
    let (_, token) = registered_token(&state, "penulis", "password123").await;
    let app = test_app(state);

    // Act
    let response = app
        .oneshot(json_request(
            "POST",
            "/posts",
            json!({ "title": "ab", "content": null }),
            Some(&token),
        ))
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(
        body.message,
        vec![
            "content should not be empty".to_string(),
            "title must be longer than or equal to 5 characters".to_string(),
        ]
    );
}

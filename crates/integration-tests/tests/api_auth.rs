//! Wire-level tests for `POST /api/auth/login`.

use axum::http::StatusCode;
use serde_json::json;

use velocity_backend::quirks::Quirks;
use velocity_integration_tests::TestBackend;

#[tokio::test]
async fn test_login_succeeds_with_fixture_credentials() {
    let backend = TestBackend::new(Quirks::canonical());

    let (status, body) = backend
        .post(
            "/api/auth/login",
            json!({ "username": "user3", "password": "user@3" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["userId"], json!("user3"));
    assert_eq!(body["username"], json!("user3"));
    assert_eq!(body["message"], json!("Login successful"));
}

#[tokio::test]
async fn test_login_rejects_wrong_password_with_401() {
    let backend = TestBackend::new(Quirks::canonical());

    let (status, body) = backend
        .post(
            "/api/auth/login",
            json!({ "username": "user3", "password": "wrong" }),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], json!("Invalid credentials"));
}

#[tokio::test]
async fn test_login_trims_surrounding_username_whitespace() {
    let backend = TestBackend::new(Quirks::canonical());

    let (status, body) = backend
        .post(
            "/api/auth/login",
            json!({ "username": "  user4 ", "password": "user@4" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], json!("user4"));
}

#[tokio::test]
async fn test_backdoor_pair_is_rejected_canonically() {
    let backend = TestBackend::new(Quirks::canonical());

    let (status, _) = backend
        .post(
            "/api/auth/login",
            json!({ "username": "user1", "password": "user@2" }),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_backdoor_pair_logs_in_as_user1_on_legacy_profile() {
    let backend = TestBackend::new(Quirks::legacy_demo());

    let (status, body) = backend
        .post(
            "/api/auth/login",
            json!({ "username": "user1", "password": "user@2" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], json!("user1"));
}

#[tokio::test]
async fn test_login_with_missing_field_is_rejected_before_dispatch() {
    let backend = TestBackend::new(Quirks::canonical());

    let (status, _) = backend
        .post("/api/auth/login", json!({ "username": "user3" }))
        .await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_failed_login_leaves_no_persisted_state() {
    let backend = TestBackend::new(Quirks::canonical());

    backend
        .post(
            "/api/auth/login",
            json!({ "username": "user3", "password": "wrong" }),
        )
        .await;

    let keys = backend.store().keys_with_prefix("").expect("keys");
    assert!(keys.is_empty());
}

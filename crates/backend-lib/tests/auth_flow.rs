// crates/backend-lib/tests/auth_flow.rs
//! End-to-end login and gate behavior over the real router.
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use backend_lib::config::{SeedUser, Settings};
use backend_lib::middleware::AUTH_HEADER;
use backend_lib::{router::create_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    let settings = Settings {
        seed_users: vec![SeedUser {
            username: "admin".to_string(),
            name: "Administrator".to_string(),
            password: "correct-password".to_string(),
        }],
        ..Settings::default()
    };
    create_router(AppState::new(settings).unwrap())
}

async fn post_login(app: &Router, body: Value) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn get_todos(app: &Router, token: Option<&str>) -> StatusCode {
    let mut builder = Request::builder().uri("/api/todos");
    if let Some(token) = token {
        builder = builder.header(AUTH_HEADER, token);
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    response.status()
}

#[tokio::test]
async fn test_login_issues_token_that_opens_the_gate() {
    let app = test_app();

    let (status, body) = post_login(
        &app,
        json!({"username": "admin", "password": "correct-password"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["username"], "admin");
    assert_eq!(body["name"], "Administrator");

    let token = body["token"].as_str().unwrap();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));

    assert_eq!(get_todos(&app, Some(token)).await, StatusCode::OK);
    assert_eq!(get_todos(&app, None).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_rejects_missing_or_empty_fields() {
    let app = test_app();

    let (status, _) = post_login(&app, json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_login(&app, json!({"username": "admin"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_login(&app, json!({"username": "", "password": "x"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_login(&app, json!({"username": "admin", "password": ""})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_failure_bodies_are_identical() {
    let app = test_app();

    let (wrong_status, wrong_body) = post_login(
        &app,
        json!({"username": "admin", "password": "wrong-password"}),
    )
    .await;
    let (ghost_status, ghost_body) = post_login(
        &app,
        json!({"username": "ghost", "password": "correct-password"}),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(ghost_status, StatusCode::UNAUTHORIZED);
    // Byte-identical: nothing in the response separates "unknown user"
    // from "wrong password".
    assert_eq!(wrong_body, ghost_body);
}

#[tokio::test]
async fn test_forged_and_garbage_tokens_are_rejected() {
    let app = test_app();

    // A fabricated self-describing token never resolves: tokens are
    // opaque lookup keys, not identity claims.
    let forged = r#"{"username":"admin"}"#;
    assert_eq!(get_todos(&app, Some(forged)).await, StatusCode::UNAUTHORIZED);

    assert_eq!(
        get_todos(&app, Some("complete garbage !!")).await,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(get_todos(&app, Some("")).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_rejection_bodies_never_leak_internals() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/todos")
                .header(AUTH_HEADER, "garbage-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(!text.contains("panic"));
    assert!(!text.contains("backtrace"));
    assert!(!text.contains("src/"));
}

#[tokio::test]
async fn test_relogin_invalidates_previous_token() {
    let app = test_app();

    let (_, first) = post_login(
        &app,
        json!({"username": "admin", "password": "correct-password"}),
    )
    .await;
    let first: Value = serde_json::from_slice(&first).unwrap();
    let first_token = first["token"].as_str().unwrap();

    let (_, second) = post_login(
        &app,
        json!({"username": "admin", "password": "correct-password"}),
    )
    .await;
    let second: Value = serde_json::from_slice(&second).unwrap();
    let second_token = second["token"].as_str().unwrap();

    assert_ne!(first_token, second_token);
    assert_eq!(
        get_todos(&app, Some(first_token)).await,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(get_todos(&app, Some(second_token)).await, StatusCode::OK);
}

#[tokio::test]
async fn test_liveness_route_is_open() {
    let app = test_app();
    let response = app
        .oneshot(Request::builder().uri("/api").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"Hello World!");
}

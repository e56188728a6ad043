// SPDX-License-Identifier: MIT

//! Authentication tests.
//!
//! These tests verify that:
//! 1. Protected routes reject requests without valid tokens
//! 2. Registration issues a token that works on protected routes
//! 3. Login verifies the password and rejects duplicates cleanly

use axum::http::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_protected_route_without_token() {
    let (app, _) = common::create_test_app().await;

    let (status, _) = common::send(&app, "GET", "/api/runs", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_invalid_token() {
    let (app, _) = common::create_test_app().await;

    let (status, _) =
        common::send(&app, "GET", "/api/runs", Some("invalid.token.here"), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_then_access_protected_route() {
    let (app, _) = common::create_test_app().await;

    let token = common::register_user(&app, "Ada", "ada@example.com").await;

    let (status, body) = common::send(&app, "GET", "/api/runs", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_register_response_hides_password_hash() {
    let (app, _) = common::create_test_app().await;

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "correct-horse-battery",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let (app, _) = common::create_test_app().await;

    common::register_user(&app, "Ada", "ada@example.com").await;

    let (status, _) = common::send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Imposter",
            "email": "ada@example.com",
            "password": "another-password-here",
        })),
    )
    .await;

    // Unique constraint violation classified as a client error, not a 500
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_with_correct_password() {
    let (app, _) = common::create_test_app().await;

    common::register_user(&app, "Ada", "ada@example.com").await;

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({
            "email": "ada@example.com",
            "password": "correct-horse-battery",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().is_some());
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let (app, _) = common::create_test_app().await;

    common::register_user(&app, "Ada", "ada@example.com").await;

    let (status, _) = common::send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({
            "email": "ada@example.com",
            "password": "wrong-password-entirely",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let (app, _) = common::create_test_app().await;

    let (status, _) = common::send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({
            "email": "nobody@example.com",
            "password": "whatever-password",
        })),
    )
    .await;

    // Unknown email is indistinguishable from a wrong password
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let (app, _) = common::create_test_app().await;

    let (status, _) = common::send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "short",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

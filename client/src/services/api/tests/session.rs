//! # Session Tests
//!
//! Token persistence on login/signup and bearer-token attachment.

use super::*;
use crate::core::LmsService;
use crate::services::api::fixtures::{MOCK_ACCESS_TOKEN, MOCK_REFRESH_TOKEN};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::routing::get;
use axum::Json;
use serde_json::json;
use shared::AuthTokens;

/// `/auth/me` stub that reports the Authorization header it received as the user id.
fn echo_auth_backend() -> Router {
    Router::new().route(
        "/api/auth/me",
        get(|headers: HeaderMap| async move {
            let auth = headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("none")
                .to_string();
            Json(json!({ "id": auth, "email": "echo@campus.example", "role": "student" }))
        }),
    )
}

#[tokio::test]
async fn test_no_token_means_no_authorization_header() {
    let api = test_client(&spawn_backend(echo_auth_backend()).await);

    let user = api.me().await;

    assert!(user.is_live());
    assert_eq!(user.data().id, "none");
}

#[tokio::test]
async fn test_stored_token_is_sent_as_bearer() {
    // Arrange
    let api = test_client(&spawn_backend(echo_auth_backend()).await);
    api.session().store_tokens(&AuthTokens {
        access_token: "tok-123".to_string(),
        refresh_token: "ref-456".to_string(),
    });

    // Act
    let user = api.me().await;

    // Assert
    assert_eq!(user.data().id, "Bearer tok-123");
}

#[tokio::test]
async fn test_fallback_login_stores_fixture_tokens() {
    // Arrange
    let api = offline_client();

    // Act
    let outcome = api.login("ivan@campus.example", "secret1").await;

    // Assert
    assert!(outcome.is_fallback());
    let expected = AuthTokens {
        access_token: MOCK_ACCESS_TOKEN.to_string(),
        refresh_token: MOCK_REFRESH_TOKEN.to_string(),
    };
    assert_eq!(outcome.data().tokens, expected);
    assert_eq!(api.session().tokens(), Some(expected));
    assert_eq!(api.current_user(), Some(fixtures().user()));
}

#[tokio::test]
async fn test_fallback_signup_keeps_submitted_identity() {
    let api = offline_client();

    let outcome = api.signup("Maria Lopez", "maria@campus.example", "secret1").await;

    assert!(outcome.is_fallback());
    let user = outcome.into_data().user;
    assert_eq!(user.name, "Maria Lopez");
    assert_eq!(user.email, "maria@campus.example");
    assert_eq!(user.id, fixtures().profile.id);
    assert_eq!(api.current_user(), Some(user));
    assert_eq!(api.session().access_token().as_deref(), Some(MOCK_ACCESS_TOKEN));
}

#[tokio::test]
async fn test_failed_reads_do_not_touch_tokens() {
    let api = offline_client();
    let tokens = AuthTokens {
        access_token: "keep-me".to_string(),
        refresh_token: "keep-me-too".to_string(),
    };
    api.session().store_tokens(&tokens);

    let _ = api.get_profile().await;
    let _ = api.get_notifications().await;

    assert_eq!(api.session().tokens(), Some(tokens));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let api = offline_client();
    api.login("ivan@campus.example", "secret1").await;
    assert!(api.session().is_signed_in());

    api.logout();

    assert!(api.session().tokens().is_none());
    assert!(api.current_user().is_none());
}

#[tokio::test]
async fn test_session_is_shared_between_clones() {
    let api = offline_client();
    let other = api.clone();

    api.login("ivan@campus.example", "secret1").await;

    assert_eq!(other.session().access_token().as_deref(), Some(MOCK_ACCESS_TOKEN));
}

//! Integration tests for refresh token rotation and session replacement.

mod helpers;

use chrono::{DateTime, Duration, Utc};
use http::StatusCode;
use uuid::Uuid;

use warden_entity::token::RefreshToken;

#[tokio::test]
async fn test_refresh_rotates_the_token() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("rotate@example.com", "vault-pass-1", "user")
        .await;
    let (first_access, first_refresh) = app.login_tokens("rotate@example.com", "vault-pass-1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": &first_refresh })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let second_refresh = response.data()["refresh_token"]
        .as_str()
        .expect("No refresh_token in refresh response")
        .to_string();
    assert_ne!(second_refresh, first_refresh);

    // The superseded token is dead.
    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": &first_refresh })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "INVALID_REFRESH_TOKEN");

    // The replacement token works.
    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": &second_refresh })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Rotation only touches refresh state; the access token minted
    // alongside the dead refresh token stays good until its expiry.
    let response = app
        .request(
            "POST",
            "/api/auth/validate-token",
            None,
            Some(first_access.as_str()),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["email"], "rotate@example.com");
}

#[tokio::test]
async fn test_refresh_reports_future_expiry() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("expiry@example.com", "vault-pass-1", "user")
        .await;
    let (_access, refresh) = app.login_tokens("expiry@example.com", "vault-pass-1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": &refresh })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let access_expires_at: DateTime<Utc> = response.data()["access_expires_at"]
        .as_str()
        .and_then(|s| s.parse().ok())
        .expect("access_expires_at is not a timestamp");
    let refresh_expires_at: DateTime<Utc> = response.data()["refresh_expires_at"]
        .as_str()
        .and_then(|s| s.parse().ok())
        .expect("refresh_expires_at is not a timestamp");

    assert!(access_expires_at > Utc::now());
    assert!(refresh_expires_at > access_expires_at);
}

#[tokio::test]
async fn test_second_login_supersedes_first_session() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("single@example.com", "vault-pass-1", "user")
        .await;

    let (first_access, first_refresh) =
        app.login_tokens("single@example.com", "vault-pass-1").await;
    let (_second_access, second_refresh) =
        app.login_tokens("single@example.com", "vault-pass-1").await;

    // Only the most recent session holds a live refresh token.
    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": &first_refresh })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "INVALID_REFRESH_TOKEN");

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": &second_refresh })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The first session's access token was never stored, so the second
    // login cannot revoke it.
    let response = app
        .request(
            "POST",
            "/api/auth/validate-token",
            None,
            Some(first_access.as_str()),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_expired_refresh_token_reports_expiry_once() {
    let app = helpers::TestApp::new().await;
    let user_id = app
        .create_test_user("stale@example.com", "vault-pass-1", "user")
        .await;

    let stale = RefreshToken {
        id: Uuid::new_v4(),
        token: "stale0000stale0000stale0000stale0000stale0000sta".to_string(),
        user_id,
        expiry_date: Utc::now() - Duration::hours(1),
        created_at: Utc::now() - Duration::hours(2),
    };
    app.storage
        .refresh_tokens
        .upsert(&stale)
        .await
        .expect("Failed to seed refresh token");

    // The first exchange reports the expiry and removes the row.
    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": &stale.token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "REFRESH_TOKEN_EXPIRED");

    // The second attempt cannot tell the token ever existed.
    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": &stale.token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "INVALID_REFRESH_TOKEN");
}

#[tokio::test]
async fn test_refresh_rejected_for_disabled_principal() {
    let app = helpers::TestApp::new().await;
    let id = app
        .create_test_user("benched@example.com", "vault-pass-1", "user")
        .await;
    let (_access, refresh) = app.login_tokens("benched@example.com", "vault-pass-1").await;

    app.disable_user(id).await;

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": &refresh })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "ACCOUNT_DISABLED");
}

#[tokio::test]
async fn test_refresh_with_unknown_token() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": "never-issued" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "INVALID_REFRESH_TOKEN");
}

//! Integration tests for login, the authentication gate and logout.

use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use chrono::{Duration, Utc};

use playerhub_auth::{KeyRing, TokenCodec, TokenDenylist};
use playerhub_auth::jwt::{JwtDecoder, JwtEncoder};
use playerhub_entity::user::UserRole;

use crate::helpers::{self, PASSWORD, TestApp, email_of};

#[tokio::test]
async fn test_login_delivers_token_in_header() {
    let app = TestApp::new();
    let id = app.create_user("alice", UserRole::User).await;

    let response = app
        .request(
            "POST",
            "/api/v1/login",
            Some(serde_json::json!({ "email": email_of("alice"), "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        serde_json::json!({
            "code": 200,
            "status": "Success",
            "message": "Login successful",
            "data": null
        })
    );

    let header = response
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .expect("Authorization header");
    let token = header.strip_prefix("Bearer ").expect("bearer prefix");
    assert!(!token.is_empty());

    let claim = app.state.token_codec.validate(token).expect("token validates");
    assert_eq!(claim.subject, id);
    assert_eq!(claim.role, UserRole::User);
}

#[tokio::test]
async fn test_login_by_username() {
    let app = TestApp::new();
    app.create_user("bob", UserRole::Admin).await;

    let token = app.login("bob", PASSWORD).await;
    let claim = app.state.token_codec.validate(&token).unwrap();
    assert_eq!(claim.role, UserRole::Admin);
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_user_look_the_same() {
    let app = TestApp::new();
    app.create_user("carol", UserRole::User).await;

    let wrong_password = app
        .request(
            "POST",
            "/api/v1/login",
            Some(serde_json::json!({ "email": email_of("carol"), "password": "nope" })),
            None,
        )
        .await;
    wrong_password.assert_error(StatusCode::UNAUTHORIZED, "Invalid email or password");
    assert!(wrong_password.headers.get(AUTHORIZATION).is_none());

    let unknown = app
        .request(
            "POST",
            "/api/v1/login",
            Some(serde_json::json!({ "email": "ghost@test.com", "password": PASSWORD })),
            None,
        )
        .await;
    unknown.assert_error(StatusCode::UNAUTHORIZED, "Invalid email or password");
}

#[tokio::test]
async fn test_login_malformed_body() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/v1/login", Some(serde_json::json!({ "email": 5 })), None)
        .await;
    response.assert_error(StatusCode::BAD_REQUEST, "Invalid request body");
}

#[tokio::test]
async fn test_missing_header_requires_token() {
    let app = TestApp::new();

    let response = app.request_raw("GET", "/api/v1/players", None, None).await;
    response.assert_error(StatusCode::UNAUTHORIZED, "Token is required");
    assert_eq!(response.body["status"], "Unauthorized");
}

#[tokio::test]
async fn test_empty_header_requires_token() {
    let app = TestApp::new();

    let response = app.request_raw("GET", "/api/v1/players", None, Some("")).await;
    response.assert_error(StatusCode::UNAUTHORIZED, "Token is required");
}

#[tokio::test]
async fn test_garbage_token_is_invalid() {
    let app = TestApp::new();

    let response = app
        .request_raw("GET", "/api/v1/players", None, Some("Bearer garbage"))
        .await;
    response.assert_error(StatusCode::UNAUTHORIZED, "Invalid token");
}

#[tokio::test]
async fn test_wrong_scheme_is_rejected() {
    let app = TestApp::new();
    let (_, token) = app.user_with_token("dave", UserRole::User).await;

    let response = app
        .request_raw(
            "GET",
            "/api/v1/players",
            None,
            Some(&format!("Token {token}")),
        )
        .await;
    response.assert_error(StatusCode::UNAUTHORIZED, "Invalid token");
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::new();
    let id = app.create_user("erin", UserRole::User).await;

    let token = app
        .state
        .token_codec
        .encoder()
        .mint_at(id, UserRole::User, Utc::now() - Duration::hours(73))
        .unwrap();

    let response = app
        .request("GET", "/api/v1/players", None, Some(&token))
        .await;
    response.assert_error(StatusCode::UNAUTHORIZED, "Invalid token");
}

#[tokio::test]
async fn test_token_from_another_secret_is_rejected() {
    let app = TestApp::new();
    let id = app.create_user("frank", UserRole::Admin).await;

    let keys = std::sync::Arc::new(KeyRing::new(
        "primary",
        b"some-other-secret-that-is-long-enough!!",
    ));
    let foreign = TokenCodec::new(
        JwtEncoder::new(keys.clone(), Duration::hours(72)),
        JwtDecoder::new(keys, 0),
        TokenDenylist::new(16, 0),
    );
    let token = foreign.mint(id, UserRole::Admin).unwrap();

    let response = app
        .request("GET", "/api/v1/users", None, Some(&token))
        .await;
    response.assert_error(StatusCode::UNAUTHORIZED, "Invalid token");
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let app = TestApp::new();
    let (_, token) = app.user_with_token("grace", UserRole::User).await;

    let before = app
        .request("GET", "/api/v1/players", None, Some(&token))
        .await;
    assert_eq!(before.status, StatusCode::OK);

    let logout = app
        .request("POST", "/api/v1/logout", None, Some(&token))
        .await;
    assert_eq!(logout.status, StatusCode::OK);
    assert_eq!(logout.message(), "Logout successful");

    let after = app
        .request("GET", "/api/v1/players", None, Some(&token))
        .await;
    after.assert_error(StatusCode::UNAUTHORIZED, "Invalid token");

    // A fresh login is unaffected.
    let fresh = app.login(&email_of("grace"), PASSWORD).await;
    let response = app
        .request("GET", "/api/v1/players", None, Some(&fresh))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_logout_is_refused_once_denylist_is_full() {
    let mut config = helpers::test_config();
    config.auth.denylist_capacity = 1;
    let app = TestApp::with_config(config);
    let (_, first) = app.user_with_token("heidi", UserRole::User).await;
    let (_, second) = app.user_with_token("ivan", UserRole::User).await;

    let logout = app
        .request("POST", "/api/v1/logout", None, Some(&first))
        .await;
    assert_eq!(logout.status, StatusCode::OK);

    let refused = app
        .request("POST", "/api/v1/logout", None, Some(&second))
        .await;
    assert_eq!(refused.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(refused.body["status"], "Service Unavailable");
    assert_ne!(refused.message(), "Logout successful");

    // The earlier revocation holds and the refused token was never reported as revoked.
    app.request("GET", "/api/v1/players", None, Some(&first))
        .await
        .assert_error(StatusCode::UNAUTHORIZED, "Invalid token");
    let still_valid = app
        .request("GET", "/api/v1/players", None, Some(&second))
        .await;
    assert_eq!(still_valid.status, StatusCode::OK);
}

#[tokio::test]
async fn test_logout_requires_token() {
    let app = TestApp::new();

    let response = app.request("POST", "/api/v1/logout", None, None).await;
    response.assert_error(StatusCode::UNAUTHORIZED, "Token is required");
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();

    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_unknown_route_uses_envelope() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/nothing-here", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["status"], "Not Found");
}

#[test]
fn test_config_secret_is_long_enough() {
    assert!(helpers::test_config().validate().is_ok());
}

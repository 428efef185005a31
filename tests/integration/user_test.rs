//! Integration tests for public registration and account reads.

use axum::http::StatusCode;

use playerhub_entity::user::UserRole;

use crate::helpers::{PASSWORD, TestApp};

fn registration(username: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "email": email,
        "password": PASSWORD,
        "age": 20,
    })
}

#[tokio::test]
async fn test_register_is_public() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/users",
            Some(registration("newbie", "newbie@test.com")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.message(), "User created successfully");
    assert_eq!(response.body["status"], "Success");
    assert_eq!(response.body["data"]["username"], "newbie");
    assert_eq!(response.body["data"]["role"], "user");
    assert!(response.body["data"].get("password_hash").is_none());
    assert!(response.body["data"].get("password").is_none());

    let token = app.login("newbie@test.com", PASSWORD).await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_register_ignores_requested_role() {
    let app = TestApp::new();

    let mut body = registration("sneaky", "sneaky@test.com");
    body["role"] = serde_json::json!("admin");

    let response = app.request("POST", "/api/v1/users", Some(body), None).await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["role"], "user");
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new();
    app.create_user("taken", UserRole::User).await;

    let response = app
        .request(
            "POST",
            "/api/v1/users",
            Some(registration("someone-else", "TAKEN@test.com")),
            None,
        )
        .await;
    response.assert_error(StatusCode::CONFLICT, "Email already in use");
}

#[tokio::test]
async fn test_register_validates_fields() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/users",
            Some(registration("valid-name", "not-an-email")),
            None,
        )
        .await;
    response.assert_error(StatusCode::BAD_REQUEST, "Email must be a valid address");
}

#[tokio::test]
async fn test_list_users_requires_token() {
    let app = TestApp::new();
    let (_, token) = app.user_with_token("lister", UserRole::User).await;

    let anonymous = app.request("GET", "/api/v1/users", None, None).await;
    anonymous.assert_error(StatusCode::UNAUTHORIZED, "Token is required");

    let listed = app.request("GET", "/api/v1/users", None, Some(&token)).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.message(), "Users fetched successfully");
    assert_eq!(listed.body["data"].as_array().unwrap().len(), 1);
}

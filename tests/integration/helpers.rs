//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use playerhub_api::{AppState, build_app};
use playerhub_core::config::{
    AppConfig, AuthConfig, DatabaseConfig, DatabaseProvider, LoggingConfig, ServerConfig,
};
use playerhub_core::types::UserId;
use playerhub_entity::user::UserRole;
use playerhub_service::user::RegisterUser;

/// Signing secret used by every test app.
pub const SECRET: &str = "integration-test-secret-0123456789abcdef";
/// Password given to every provisioned user.
pub const PASSWORD: &str = "password123";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The state behind the router, for provisioning and token checks
    pub state: AppState,
}

/// Configuration for an in-memory app with a fixed secret.
pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig {
            provider: DatabaseProvider::Memory,
            ..DatabaseConfig::default()
        },
        auth: AuthConfig::with_secret(SECRET),
        logging: LoggingConfig::default(),
    }
}

impl TestApp {
    /// Create a new test application over empty in-memory repositories
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a test application with a customised configuration
    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::in_memory(config).expect("Failed to build state");
        let router = build_app(state.clone());
        Self { router, state }
    }

    /// Create a user directly through the service and return its ID
    pub async fn create_user(&self, username: &str, role: UserRole) -> UserId {
        self.state
            .user_service
            .create_with_role(
                RegisterUser {
                    username: username.to_string(),
                    email: email_of(username),
                    password: PASSWORD.to_string(),
                    age: 25,
                },
                role,
            )
            .await
            .expect("Failed to create test user")
            .id
    }

    /// Login and return the bearer token from the `Authorization` header
    pub async fn login(&self, identifier: &str, password: &str) -> String {
        let body = serde_json::json!({
            "email": identifier,
            "password": password,
        });

        let response = self
            .request("POST", "/api/v1/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .expect("No bearer token in login response")
            .to_string()
    }

    /// Create a user with `role` and log it in
    pub async fn user_with_token(&self, username: &str, role: UserRole) -> (UserId, String) {
        let id = self.create_user(username, role).await;
        let token = self.login(&email_of(username), PASSWORD).await;
        (id, token)
    }

    /// Create a player profile as the token's owner and return its ID
    pub async fn create_player(&self, token: &str, nickname: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/v1/players",
                Some(serde_json::json!({ "nickname": nickname })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["data"]["id"]
            .as_i64()
            .expect("player id in response")
    }

    /// Make an HTTP request with an optional bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let authorization = token.map(|t| format!("Bearer {t}"));
        self.request_raw(method, path, body, authorization.as_deref())
            .await
    }

    /// Make an HTTP request with a verbatim `Authorization` header value
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header(AUTHORIZATION, value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Email address assigned to a provisioned username
pub fn email_of(username: &str) -> String {
    format!("{username}@test.com")
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The envelope's `message` field
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }

    /// Assert status plus the envelope's `code` and `message`
    pub fn assert_error(&self, status: StatusCode, message: &str) {
        assert_eq!(self.status, status, "{:?}", self.body);
        assert_eq!(self.body["code"], status.as_u16());
        assert_eq!(self.message(), message);
        assert!(self.body["data"].is_null());
    }
}

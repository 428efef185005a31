//! Maps domain `AppError` to HTTP responses.
//!
//! Every failure leaves the API as the standard envelope
//! `{code, status, message, data: null}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use playerhub_auth::TokenError;
use playerhub_core::error::{AppError, ErrorKind};
use playerhub_core::types::BaseResponse;

/// Message returned for every 5xx; the detail only goes to the log.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Result alias for handlers and middleware.
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP-facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// Shorthand for a 400 with the given message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(AppError::validation(message))
    }

    /// Shorthand for a 401 with the given message.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self(AppError::authentication(message))
    }

    /// The status code and reason phrase this error maps to.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self.0.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "Bad Request"),
            ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            ErrorKind::Authorization => (StatusCode::FORBIDDEN, "Forbidden"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "Conflict"),
            ErrorKind::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable"),
            ErrorKind::TokenIssuance
            | ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        Self(AppError::from(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, reason) = self.status();

        let message = if status == StatusCode::SERVICE_UNAVAILABLE {
            tracing::warn!(kind = %self.0.kind, error = %self.0, "Service unavailable");
            self.0.message
        } else if status.is_server_error() {
            tracing::error!(
                kind = %self.0.kind,
                error = %self.0,
                source = ?std::error::Error::source(&self.0),
                "Internal server error"
            );
            INTERNAL_MESSAGE.to_string()
        } else {
            self.0.message
        };

        let body: BaseResponse = BaseResponse::empty(status.as_u16(), reason, message);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::validation("x"), 400, "Bad Request"),
            (AppError::authentication("x"), 401, "Unauthorized"),
            (AppError::authorization("x"), 403, "Forbidden"),
            (AppError::not_found("x"), 404, "Not Found"),
            (AppError::conflict("x"), 409, "Conflict"),
            (AppError::unavailable("x"), 503, "Service Unavailable"),
            (AppError::database("x"), 500, "Internal Server Error"),
            (AppError::token_issuance("x"), 500, "Internal Server Error"),
        ];
        for (err, code, reason) in cases {
            let (status, label) = ApiError(err).status();
            assert_eq!(status.as_u16(), code);
            assert_eq!(label, reason);
        }
    }

    #[test]
    fn test_token_errors_become_invalid_token() {
        let err = ApiError::from(TokenError::Expired);
        assert_eq!(err.status().0, StatusCode::UNAUTHORIZED);
        assert_eq!(err.0.message, "Invalid token");
    }

    #[test]
    fn test_full_denylist_is_service_unavailable() {
        let err = ApiError::from(TokenError::DenylistFull);
        assert_eq!(err.status().0, StatusCode::SERVICE_UNAVAILABLE);
        assert_ne!(err.0.message, INTERNAL_MESSAGE);
    }

    #[test]
    fn test_internal_detail_hidden() {
        let response = ApiError(AppError::database("relation \"users\" does not exist"))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

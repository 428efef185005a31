//! Login and logout handlers.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::http::header::AUTHORIZATION;
use axum::response::{IntoResponse, Response};
use tracing::info;

use playerhub_core::AppError;
use playerhub_core::types::BaseResponse;

use crate::dto::request::LoginRequest;
use crate::error::ApiResult;
use crate::extractors::{CurrentToken, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/login
///
/// The token travels only in the `Authorization` response header; the
/// body is the bare envelope.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Response> {
    let session = state
        .session_issuer
        .login(&req.email, &req.password)
        .await?;

    let header = HeaderValue::from_str(&format!("Bearer {}", session.token))
        .map_err(|e| AppError::internal(format!("Token is not a valid header value: {e}")))?;

    let body: BaseResponse = BaseResponse::empty(200, "Success", "Login successful");
    Ok(([(AUTHORIZATION, header)], Json(body)).into_response())
}

/// POST /api/v1/logout
///
/// Revokes the presented token until it would have expired anyway. When
/// the revocation cannot be recorded the request fails and the token stays
/// valid.
pub async fn logout(
    State(state): State<AppState>,
    CurrentToken(claim): CurrentToken,
) -> ApiResult<Json<BaseResponse>> {
    state.token_codec.revoke(&claim).await?;
    info!(user_id = %claim.subject, token_id = %claim.token_id, "User logged out");
    Ok(Json(BaseResponse::empty(200, "Success", "Logout successful")))
}

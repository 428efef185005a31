//! Health check and fallback handlers.

use axum::Json;

use playerhub_core::types::BaseResponse;

use crate::dto::response::HealthResponse;
use crate::error::ApiError;

/// GET /health
pub async fn health() -> Json<BaseResponse<HealthResponse>> {
    Json(BaseResponse::success(
        "Service is healthy",
        HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    ))
}

/// Any unmatched route.
pub async fn not_found() -> ApiError {
    ApiError(playerhub_core::AppError::not_found("Route not found"))
}

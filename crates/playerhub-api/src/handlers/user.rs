//! User account handlers.

use axum::Json;
use axum::extract::{Path, State};

use playerhub_core::types::{BaseResponse, UserId};

use crate::dto::request::{RegisterRequest, UpdateUserBody};
use crate::dto::response::UserResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// POST /api/v1/users
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<Json<BaseResponse<UserResponse>>> {
    let user = state.user_service.register(req.into()).await?;
    Ok(Json(BaseResponse::success(
        "User created successfully",
        user.into(),
    )))
}

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<BaseResponse<Vec<UserResponse>>>> {
    let users = state.user_service.list().await?;
    Ok(Json(BaseResponse::success(
        "Users fetched successfully",
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BaseResponse<UserResponse>>> {
    let id: UserId = parse_id(&id, "user")?;
    let user = state.user_service.get(id).await?;
    Ok(Json(BaseResponse::success(
        "User fetched successfully",
        user.into(),
    )))
}

/// PUT /api/v1/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateUserBody>,
) -> ApiResult<Json<BaseResponse<UserResponse>>> {
    let id: UserId = parse_id(&id, "user")?;
    let user = state.user_service.update(id, body.into()).await?;
    Ok(Json(BaseResponse::success(
        "User updated successfully",
        user.into(),
    )))
}

/// DELETE /api/v1/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BaseResponse>> {
    let id: UserId = parse_id(&id, "user")?;
    state.user_service.delete(id).await?;
    Ok(Json(BaseResponse::empty(
        200,
        "Success",
        "User deleted successfully",
    )))
}

//! Achievement and award handlers.
//!
//! Mutations sit behind the admin role gate in the router; reads are open
//! to any authenticated caller.

use axum::Json;
use axum::extract::{Path, State};

use playerhub_core::types::{AchievementId, BaseResponse, PlayerId};
use playerhub_entity::achievement::{Achievement, PlayerAchievement};
use playerhub_service::AchievementWithPlayers;

use crate::dto::request::{CreateAchievementBody, UpdateAchievementBody};
use crate::error::ApiResult;
use crate::extractors::{ValidatedJson, parse_id};
use crate::state::AppState;

/// POST /api/v1/achievements
pub async fn create_achievement(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateAchievementBody>,
) -> ApiResult<Json<BaseResponse<Achievement>>> {
    let achievement = state.achievement_service.create(body.into()).await?;
    Ok(Json(BaseResponse::success(
        "Achievement created successfully",
        achievement,
    )))
}

/// GET /api/v1/achievements
pub async fn list_achievements(
    State(state): State<AppState>,
) -> ApiResult<Json<BaseResponse<Vec<Achievement>>>> {
    let achievements = state.achievement_service.list().await?;
    Ok(Json(BaseResponse::success(
        "Achievements retrieved successfully",
        achievements,
    )))
}

/// GET /api/v1/achievements/{id}
pub async fn get_achievement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BaseResponse<Achievement>>> {
    let id: AchievementId = parse_id(&id, "achievement")?;
    let achievement = state.achievement_service.get(id).await?;
    Ok(Json(BaseResponse::success(
        "Achievement retrieved successfully",
        achievement,
    )))
}

/// GET /api/v1/achievements/{id}/players
pub async fn get_achievement_players(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BaseResponse<AchievementWithPlayers>>> {
    let id: AchievementId = parse_id(&id, "achievement")?;
    let achievement = state.achievement_service.with_players(id).await?;
    Ok(Json(BaseResponse::success(
        "Achievement with players retrieved successfully",
        achievement,
    )))
}

/// PUT /api/v1/achievements/{id}
pub async fn update_achievement(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateAchievementBody>,
) -> ApiResult<Json<BaseResponse<Achievement>>> {
    let id: AchievementId = parse_id(&id, "achievement")?;
    let achievement = state.achievement_service.update(id, body.into()).await?;
    Ok(Json(BaseResponse::success(
        "Achievement updated successfully",
        achievement,
    )))
}

/// DELETE /api/v1/achievements/{id}
pub async fn delete_achievement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BaseResponse>> {
    let id: AchievementId = parse_id(&id, "achievement")?;
    state.achievement_service.delete(id).await?;
    Ok(Json(BaseResponse::empty(
        200,
        "Success",
        "Achievement deleted successfully",
    )))
}

/// POST /api/v1/achievements/{id}/players/{player_id}
pub async fn award_achievement(
    State(state): State<AppState>,
    Path((id, player_id)): Path<(String, String)>,
) -> ApiResult<Json<BaseResponse<PlayerAchievement>>> {
    let id: AchievementId = parse_id(&id, "achievement")?;
    let player_id: PlayerId = parse_id(&player_id, "player")?;
    let award = state.achievement_service.award(id, player_id).await?;
    Ok(Json(BaseResponse::success(
        "Achievement awarded successfully",
        award,
    )))
}

/// DELETE /api/v1/achievements/{id}/players/{player_id}
pub async fn revoke_achievement(
    State(state): State<AppState>,
    Path((id, player_id)): Path<(String, String)>,
) -> ApiResult<Json<BaseResponse>> {
    let id: AchievementId = parse_id(&id, "achievement")?;
    let player_id: PlayerId = parse_id(&player_id, "player")?;
    state.achievement_service.revoke(id, player_id).await?;
    Ok(Json(BaseResponse::empty(
        200,
        "Success",
        "Achievement revoked successfully",
    )))
}

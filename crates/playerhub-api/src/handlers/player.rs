//! Player profile handlers.

use axum::Json;
use axum::extract::{Path, State};

use playerhub_core::types::{BaseResponse, PlayerId};
use playerhub_entity::player::PlayerProfile;
use playerhub_service::PlayerWithAchievements;

use crate::dto::request::{CreatePlayerBody, UpdatePlayerBody};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// POST /api/v1/players
pub async fn create_player(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(body): ValidatedJson<CreatePlayerBody>,
) -> ApiResult<Json<BaseResponse<PlayerProfile>>> {
    let player = state
        .player_service
        .create(auth.context(), body.into())
        .await?;
    Ok(Json(BaseResponse::success(
        "Player profile created successfully",
        player,
    )))
}

/// GET /api/v1/players
pub async fn list_players(
    State(state): State<AppState>,
) -> ApiResult<Json<BaseResponse<Vec<PlayerProfile>>>> {
    let players = state.player_service.list().await?;
    Ok(Json(BaseResponse::success(
        "Players fetched successfully",
        players,
    )))
}

/// GET /api/v1/players/{id}
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BaseResponse<PlayerProfile>>> {
    let id: PlayerId = parse_id(&id, "player")?;
    let player = state.player_service.get(id).await?;
    Ok(Json(BaseResponse::success(
        "Player fetched successfully",
        player,
    )))
}

/// GET /api/v1/players/{id}/achievements
pub async fn get_player_achievements(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BaseResponse<PlayerWithAchievements>>> {
    let id: PlayerId = parse_id(&id, "player")?;
    let player = state.player_service.with_achievements(id).await?;
    Ok(Json(BaseResponse::success(
        "Player with achievements fetched successfully",
        player,
    )))
}

/// PUT /api/v1/players/{id}
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdatePlayerBody>,
) -> ApiResult<Json<BaseResponse<PlayerProfile>>> {
    let id: PlayerId = parse_id(&id, "player")?;
    let player = state.player_service.update(id, body.into()).await?;
    Ok(Json(BaseResponse::success(
        "Player updated successfully",
        player,
    )))
}

/// DELETE /api/v1/players/{id}
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BaseResponse>> {
    let id: PlayerId = parse_id(&id, "player")?;
    state.player_service.delete(id).await?;
    Ok(Json(BaseResponse::empty(
        200,
        "Success",
        "Player deleted successfully",
    )))
}

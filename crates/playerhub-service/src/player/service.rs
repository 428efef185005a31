//! Player profile CRUD and achievement listing.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use playerhub_core::error::AppError;
use playerhub_core::result::AppResult;
use playerhub_core::traits::Repository;
use playerhub_core::types::{PlayerId, UserId};
use playerhub_database::{AwardRepository, PlayerRepository, UserRepository};
use playerhub_entity::achievement::Achievement;
use playerhub_entity::player::{CreatePlayer, PlayerProfile, UpdatePlayer};

use crate::context::RequestContext;

/// Data for creating a player profile.
#[derive(Debug, Clone, Default)]
pub struct CreatePlayerRequest {
    /// Unique display name.
    pub nickname: String,
    /// Avatar URL.
    pub avatar: String,
    /// Starting level, defaults to 1.
    pub level: Option<i32>,
    /// Starting experience, defaults to 0.
    pub experience: Option<i32>,
    /// Starting points, defaults to 0.
    pub points: Option<i32>,
    /// Owner; defaults to the caller. Only admins may name someone else.
    pub user_id: Option<UserId>,
}

/// Partial update of a profile. Absent fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlayerRequest {
    /// New nickname.
    pub nickname: Option<String>,
    /// New avatar URL.
    pub avatar: Option<String>,
    /// New level.
    pub level: Option<i32>,
    /// New experience.
    pub experience: Option<i32>,
    /// New points.
    pub points: Option<i32>,
}

/// A profile together with the achievements it holds.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerWithAchievements {
    /// The profile.
    #[serde(flatten)]
    pub player: PlayerProfile,
    /// Achievements earned, in award order.
    pub achievements: Vec<Achievement>,
}

/// Handles player profiles.
#[derive(Clone)]
pub struct PlayerService {
    players: Arc<dyn PlayerRepository>,
    users: Arc<dyn UserRepository>,
    awards: Arc<dyn AwardRepository>,
}

impl std::fmt::Debug for PlayerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerService").finish_non_exhaustive()
    }
}

impl PlayerService {
    /// Creates a new player service.
    pub fn new(
        players: Arc<dyn PlayerRepository>,
        users: Arc<dyn UserRepository>,
        awards: Arc<dyn AwardRepository>,
    ) -> Self {
        Self {
            players,
            users,
            awards,
        }
    }

    /// Creates a profile owned by the caller, or by `req.user_id` for admins.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreatePlayerRequest,
    ) -> AppResult<PlayerProfile> {
        let owner = req.user_id.unwrap_or(ctx.user_id);
        if owner != ctx.user_id && !ctx.is_admin() {
            return Err(AppError::authorization(
                "You are not allowed to perform this action",
            ));
        }
        if self.users.find_by_id(owner).await?.is_none() {
            return Err(AppError::not_found("User not found"));
        }

        let player = self
            .players
            .create(&CreatePlayer {
                nickname: req.nickname.trim().to_string(),
                avatar: req.avatar,
                level: req.level.unwrap_or(1),
                experience: req.experience.unwrap_or(0),
                points: req.points.unwrap_or(0),
                user_id: owner,
            })
            .await?;

        info!(player_id = %player.id, user_id = %owner, "Player profile created");
        Ok(player)
    }

    /// Gets a profile by ID.
    pub async fn get(&self, id: PlayerId) -> AppResult<PlayerProfile> {
        self.players
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Player not found"))
    }

    /// Lists every profile.
    pub async fn list(&self) -> AppResult<Vec<PlayerProfile>> {
        self.players.find_all().await
    }

    /// Applies a partial update to a profile. The owner never changes.
    pub async fn update(&self, id: PlayerId, req: UpdatePlayerRequest) -> AppResult<PlayerProfile> {
        let current = self.get(id).await?;

        let changes = UpdatePlayer {
            nickname: req
                .nickname
                .map(|n| n.trim().to_string())
                .unwrap_or(current.nickname),
            avatar: req.avatar.unwrap_or(current.avatar),
            level: req.level.unwrap_or(current.level),
            experience: req.experience.unwrap_or(current.experience),
            points: req.points.unwrap_or(current.points),
        };

        let player = self
            .players
            .update(id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found("Player not found"))?;

        info!(player_id = %id, "Player profile updated");
        Ok(player)
    }

    /// Deletes a profile and its awards.
    pub async fn delete(&self, id: PlayerId) -> AppResult<()> {
        if !self.players.delete(id).await? {
            return Err(AppError::not_found("Player not found"));
        }
        info!(player_id = %id, "Player profile deleted");
        Ok(())
    }

    /// Gets a profile with the achievements it holds.
    pub async fn with_achievements(&self, id: PlayerId) -> AppResult<PlayerWithAchievements> {
        let player = self.get(id).await?;
        let achievements = self.awards.achievements_for_player(id).await?;
        Ok(PlayerWithAchievements {
            player,
            achievements,
        })
    }
}

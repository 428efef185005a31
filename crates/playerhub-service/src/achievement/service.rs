//! Achievement CRUD plus awarding achievements to players.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use playerhub_core::error::AppError;
use playerhub_core::result::AppResult;
use playerhub_core::traits::Repository;
use playerhub_core::types::{AchievementId, PlayerId};
use playerhub_database::{AchievementRepository, AwardRepository};
use playerhub_entity::achievement::{
    Achievement, CreateAchievement, NewPlayerAchievement, PlayerAchievement, UpdateAchievement,
};
use playerhub_entity::player::PlayerProfile;

/// Data for creating an achievement.
#[derive(Debug, Clone)]
pub struct CreateAchievementRequest {
    /// Display name.
    pub name: String,
    /// What the player did to earn it.
    pub description: String,
}

/// Partial update of an achievement.
#[derive(Debug, Clone, Default)]
pub struct UpdateAchievementRequest {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
}

/// An achievement together with the players holding it.
#[derive(Debug, Clone, Serialize)]
pub struct AchievementWithPlayers {
    /// The achievement.
    #[serde(flatten)]
    pub achievement: Achievement,
    /// Holders, in award order.
    pub players: Vec<PlayerProfile>,
}

/// Handles achievements and awards.
#[derive(Clone)]
pub struct AchievementService {
    achievements: Arc<dyn AchievementRepository>,
    awards: Arc<dyn AwardRepository>,
}

impl std::fmt::Debug for AchievementService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AchievementService").finish_non_exhaustive()
    }
}

impl AchievementService {
    /// Creates a new achievement service.
    pub fn new(
        achievements: Arc<dyn AchievementRepository>,
        awards: Arc<dyn AwardRepository>,
    ) -> Self {
        Self {
            achievements,
            awards,
        }
    }

    /// Adds an achievement to the catalogue.
    pub async fn create(&self, req: CreateAchievementRequest) -> AppResult<Achievement> {
        let achievement = self
            .achievements
            .create(&CreateAchievement {
                name: req.name.trim().to_string(),
                description: req.description.trim().to_string(),
            })
            .await?;

        info!(achievement_id = %achievement.id, "Achievement created");
        Ok(achievement)
    }

    /// Gets an achievement by ID.
    pub async fn get(&self, id: AchievementId) -> AppResult<Achievement> {
        self.achievements
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Achievement not found"))
    }

    /// Lists the whole catalogue.
    pub async fn list(&self) -> AppResult<Vec<Achievement>> {
        self.achievements.find_all().await
    }

    /// Applies a partial update to an achievement.
    pub async fn update(
        &self,
        id: AchievementId,
        req: UpdateAchievementRequest,
    ) -> AppResult<Achievement> {
        let current = self.get(id).await?;

        let changes = UpdateAchievement {
            name: req
                .name
                .map(|n| n.trim().to_string())
                .unwrap_or(current.name),
            description: req
                .description
                .map(|d| d.trim().to_string())
                .unwrap_or(current.description),
        };

        let achievement = self
            .achievements
            .update(id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found("Achievement not found"))?;

        info!(achievement_id = %id, "Achievement updated");
        Ok(achievement)
    }

    /// Removes an achievement and every award of it.
    pub async fn delete(&self, id: AchievementId) -> AppResult<()> {
        if !self.achievements.delete(id).await? {
            return Err(AppError::not_found("Achievement not found"));
        }
        info!(achievement_id = %id, "Achievement deleted");
        Ok(())
    }

    /// Gets an achievement with the players holding it.
    pub async fn with_players(&self, id: AchievementId) -> AppResult<AchievementWithPlayers> {
        let achievement = self.get(id).await?;
        let players = self.awards.players_for_achievement(id).await?;
        Ok(AchievementWithPlayers {
            achievement,
            players,
        })
    }

    /// Awards an achievement to a player.
    pub async fn award(
        &self,
        achievement_id: AchievementId,
        player_id: PlayerId,
    ) -> AppResult<PlayerAchievement> {
        let award = self
            .awards
            .award(&NewPlayerAchievement {
                player_id,
                achievement_id,
            })
            .await?;

        info!(%achievement_id, %player_id, "Achievement awarded");
        Ok(award)
    }

    /// Takes an achievement away from a player.
    pub async fn revoke(&self, achievement_id: AchievementId, player_id: PlayerId) -> AppResult<()> {
        if !self.awards.revoke(player_id, achievement_id).await? {
            return Err(AppError::not_found("Player does not hold this achievement"));
        }
        info!(%achievement_id, %player_id, "Achievement revoked");
        Ok(())
    }
}

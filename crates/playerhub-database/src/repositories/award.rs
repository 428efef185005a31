//! PostgreSQL repository for the player/achievement association.

use async_trait::async_trait;
use sqlx::PgPool;

use playerhub_core::error::{AppError, ErrorKind};
use playerhub_core::result::AppResult;
use playerhub_core::types::{AchievementId, PlayerId};
use playerhub_entity::achievement::{Achievement, NewPlayerAchievement, PlayerAchievement};
use playerhub_entity::player::PlayerProfile;

use super::{AwardRepository, db_error, violated_constraint};

/// sqlx-backed [`AwardRepository`].
#[derive(Debug, Clone)]
pub struct PgAwardRepository {
    pool: PgPool,
}

impl PgAwardRepository {
    /// Create a new award repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AwardRepository for PgAwardRepository {
    async fn award(&self, data: &NewPlayerAchievement) -> AppResult<PlayerAchievement> {
        sqlx::query_as::<_, PlayerAchievement>(
            "INSERT INTO player_achievements (player_id, achievement_id) \
             VALUES ($1, $2) RETURNING *",
        )
        .bind(data.player_id)
        .bind(data.achievement_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violated_constraint(&e) {
            Some("player_achievements_player_id_achievement_id_key") => {
                AppError::conflict("Player already holds this achievement")
            }
            Some("player_achievements_player_id_fkey") => AppError::not_found("Player not found"),
            Some("player_achievements_achievement_id_fkey") => {
                AppError::not_found("Achievement not found")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to award achievement", e),
        })
    }

    async fn revoke(&self, player_id: PlayerId, achievement_id: AchievementId) -> AppResult<bool> {
        let result = sqlx::query(
            "DELETE FROM player_achievements WHERE player_id = $1 AND achievement_id = $2",
        )
        .bind(player_id)
        .bind(achievement_id)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to revoke achievement"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn achievements_for_player(&self, player_id: PlayerId) -> AppResult<Vec<Achievement>> {
        sqlx::query_as::<_, Achievement>(
            "SELECT a.* FROM achievements a \
             JOIN player_achievements pa ON pa.achievement_id = a.id \
             WHERE pa.player_id = $1 ORDER BY pa.id",
        )
        .bind(player_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list achievements for player"))
    }

    async fn players_for_achievement(
        &self,
        achievement_id: AchievementId,
    ) -> AppResult<Vec<PlayerProfile>> {
        sqlx::query_as::<_, PlayerProfile>(
            "SELECT p.* FROM player_profiles p \
             JOIN player_achievements pa ON pa.player_id = p.id \
             WHERE pa.achievement_id = $1 ORDER BY pa.id",
        )
        .bind(achievement_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list players for achievement"))
    }
}

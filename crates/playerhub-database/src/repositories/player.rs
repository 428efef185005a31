//! PostgreSQL player profile repository.

use async_trait::async_trait;
use sqlx::PgPool;

use playerhub_core::error::{AppError, ErrorKind};
use playerhub_core::result::AppResult;
use playerhub_core::traits::Repository;
use playerhub_core::types::PlayerId;
use playerhub_entity::player::{CreatePlayer, PlayerProfile, UpdatePlayer};

use super::{PlayerRepository, db_error, violated_constraint};

/// sqlx-backed [`PlayerRepository`].
#[derive(Debug, Clone)]
pub struct PgPlayerRepository {
    pool: PgPool,
}

impl PgPlayerRepository {
    /// Create a new player repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_write_error(e: sqlx::Error, action: &'static str) -> AppError {
    match violated_constraint(&e) {
        Some("player_profiles_nickname_key") => AppError::conflict("Nickname already taken"),
        Some("player_profiles_user_id_fkey") => AppError::not_found("User not found"),
        _ => AppError::with_source(ErrorKind::Database, action, e),
    }
}

#[async_trait]
impl Repository<PlayerProfile, PlayerId, CreatePlayer, UpdatePlayer> for PgPlayerRepository {
    async fn find_by_id(&self, id: PlayerId) -> AppResult<Option<PlayerProfile>> {
        sqlx::query_as::<_, PlayerProfile>("SELECT * FROM player_profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find player by id"))
    }

    async fn find_all(&self) -> AppResult<Vec<PlayerProfile>> {
        sqlx::query_as::<_, PlayerProfile>("SELECT * FROM player_profiles ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list players"))
    }

    async fn create(&self, data: &CreatePlayer) -> AppResult<PlayerProfile> {
        sqlx::query_as::<_, PlayerProfile>(
            "INSERT INTO player_profiles (nickname, avatar, level, experience, points, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.nickname)
        .bind(&data.avatar)
        .bind(data.level)
        .bind(data.experience)
        .bind(data.points)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create player"))
    }

    async fn update(
        &self,
        id: PlayerId,
        changes: &UpdatePlayer,
    ) -> AppResult<Option<PlayerProfile>> {
        sqlx::query_as::<_, PlayerProfile>(
            "UPDATE player_profiles SET nickname = $2, avatar = $3, level = $4, \
                                        experience = $5, points = $6, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&changes.nickname)
        .bind(&changes.avatar)
        .bind(changes.level)
        .bind(changes.experience)
        .bind(changes.points)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update player"))
    }

    async fn delete(&self, id: PlayerId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM player_profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete player"))?;
        Ok(result.rows_affected() > 0)
    }
}

impl PlayerRepository for PgPlayerRepository {}

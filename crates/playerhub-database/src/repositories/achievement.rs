//! PostgreSQL achievement repository.

use async_trait::async_trait;
use sqlx::PgPool;

use playerhub_core::error::{AppError, ErrorKind};
use playerhub_core::result::AppResult;
use playerhub_core::traits::Repository;
use playerhub_core::types::AchievementId;
use playerhub_entity::achievement::{Achievement, CreateAchievement, UpdateAchievement};

use super::{AchievementRepository, db_error, violated_constraint};

/// sqlx-backed [`AchievementRepository`].
#[derive(Debug, Clone)]
pub struct PgAchievementRepository {
    pool: PgPool,
}

impl PgAchievementRepository {
    /// Create a new achievement repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_write_error(e: sqlx::Error, action: &'static str) -> AppError {
    match violated_constraint(&e) {
        Some("achievements_name_key") => AppError::conflict("Achievement name already exists"),
        _ => AppError::with_source(ErrorKind::Database, action, e),
    }
}

#[async_trait]
impl Repository<Achievement, AchievementId, CreateAchievement, UpdateAchievement>
    for PgAchievementRepository
{
    async fn find_by_id(&self, id: AchievementId) -> AppResult<Option<Achievement>> {
        sqlx::query_as::<_, Achievement>("SELECT * FROM achievements WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find achievement by id"))
    }

    async fn find_all(&self) -> AppResult<Vec<Achievement>> {
        sqlx::query_as::<_, Achievement>("SELECT * FROM achievements ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list achievements"))
    }

    async fn create(&self, data: &CreateAchievement) -> AppResult<Achievement> {
        sqlx::query_as::<_, Achievement>(
            "INSERT INTO achievements (name, description) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create achievement"))
    }

    async fn update(
        &self,
        id: AchievementId,
        changes: &UpdateAchievement,
    ) -> AppResult<Option<Achievement>> {
        sqlx::query_as::<_, Achievement>(
            "UPDATE achievements SET name = $2, description = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update achievement"))
    }

    async fn delete(&self, id: AchievementId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM achievements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete achievement"))?;
        Ok(result.rows_affected() > 0)
    }
}

impl AchievementRepository for PgAchievementRepository {}

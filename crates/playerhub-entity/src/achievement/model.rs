//! Achievement entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use playerhub_core::types::AchievementId;

/// An achievement that can be awarded to player profiles.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Achievement {
    /// Unique achievement identifier.
    pub id: AchievementId,
    /// Short name.
    pub name: String,
    /// What the player did to earn it.
    pub description: String,
    /// When the achievement was created.
    pub created_at: DateTime<Utc>,
    /// When the achievement was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create an achievement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAchievement {
    /// Short name.
    pub name: String,
    /// Description.
    pub description: String,
}

/// Data for updating an achievement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAchievement {
    /// Short name.
    pub name: String,
    /// Description.
    pub description: String,
}

//! Link between a player profile and an achievement it has earned.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use playerhub_core::types::{AchievementId, PlayerAchievementId, PlayerId};

/// An achievement awarded to a player profile.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PlayerAchievement {
    /// Unique award identifier.
    pub id: PlayerAchievementId,
    /// The player that earned the achievement.
    pub player_id: PlayerId,
    /// The achievement earned.
    pub achievement_id: AchievementId,
    /// When it was awarded.
    pub created_at: DateTime<Utc>,
}

/// Data required to award an achievement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NewPlayerAchievement {
    /// Player receiving the award.
    pub player_id: PlayerId,
    /// Achievement being awarded.
    pub achievement_id: AchievementId,
}

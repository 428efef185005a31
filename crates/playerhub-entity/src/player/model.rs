//! Player profile entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use playerhub_core::types::{PlayerId, UserId};

/// A game profile owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PlayerProfile {
    /// Unique profile identifier.
    pub id: PlayerId,
    /// Unique nickname.
    pub nickname: String,
    /// Avatar URL.
    pub avatar: String,
    /// Current level.
    pub level: i32,
    /// Accumulated experience.
    pub experience: i32,
    /// Accumulated points.
    pub points: i32,
    /// Owning user. Fixed at creation; no update path changes it.
    pub user_id: UserId,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

impl PlayerProfile {
    /// The user that owns this profile.
    pub fn owner(&self) -> UserId {
        self.user_id
    }
}

/// Data required to create a player profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlayer {
    /// Nickname.
    pub nickname: String,
    /// Avatar URL.
    pub avatar: String,
    /// Starting level.
    pub level: i32,
    /// Starting experience.
    pub experience: i32,
    /// Starting points.
    pub points: i32,
    /// Owning user.
    pub user_id: UserId,
}

/// Mutable fields of a player profile. The owner is deliberately absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePlayer {
    /// Nickname.
    pub nickname: String,
    /// Avatar URL.
    pub avatar: String,
    /// Level.
    pub level: i32,
    /// Experience.
    pub experience: i32,
    /// Points.
    pub points: i32,
}

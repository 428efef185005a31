//! Repository traits for every PlayerHub entity and their PostgreSQL
//! implementations.
//!
//! Services only ever hold `Arc<dyn ...Repository>`, so the backing store
//! (PostgreSQL or [`crate::memory::MemoryStore`]) is chosen at startup.

pub mod achievement;
pub mod award;
pub mod player;
pub mod user;

use async_trait::async_trait;

use playerhub_core::error::{AppError, ErrorKind};
use playerhub_core::result::AppResult;
use playerhub_core::traits::Repository;
use playerhub_core::types::{AchievementId, PlayerId, UserId};
use playerhub_entity::achievement::{
    Achievement, CreateAchievement, NewPlayerAchievement, PlayerAchievement, UpdateAchievement,
};
use playerhub_entity::player::{CreatePlayer, PlayerProfile, UpdatePlayer};
use playerhub_entity::user::{CreateUser, UpdateUser, User};

pub use achievement::PgAchievementRepository;
pub use award::PgAwardRepository;
pub use player::PgPlayerRepository;
pub use user::PgUserRepository;

/// User storage.
#[async_trait]
pub trait UserRepository: Repository<User, UserId, CreateUser, UpdateUser> {
    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by username (case-insensitive).
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

/// Player profile storage.
pub trait PlayerRepository: Repository<PlayerProfile, PlayerId, CreatePlayer, UpdatePlayer> {}

/// Achievement catalogue storage.
pub trait AchievementRepository:
    Repository<Achievement, AchievementId, CreateAchievement, UpdateAchievement>
{
}

/// Storage for the player/achievement association.
#[async_trait]
pub trait AwardRepository: Send + Sync + 'static {
    /// Record that a player earned an achievement.
    ///
    /// Fails with a conflict if the pair already exists and with not-found
    /// if either side does not exist.
    async fn award(&self, data: &NewPlayerAchievement) -> AppResult<PlayerAchievement>;

    /// Remove an award. Returns `true` if a row was removed.
    async fn revoke(&self, player_id: PlayerId, achievement_id: AchievementId) -> AppResult<bool>;

    /// Achievements earned by a player, in award order.
    async fn achievements_for_player(&self, player_id: PlayerId) -> AppResult<Vec<Achievement>>;

    /// Players holding an achievement, in award order.
    async fn players_for_achievement(
        &self,
        achievement_id: AchievementId,
    ) -> AppResult<Vec<PlayerProfile>>;
}

/// Wrap a sqlx failure that has no more specific mapping.
pub(crate) fn db_error(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, message, e)
}

/// Name of the constraint a database error tripped, if any.
pub(crate) fn violated_constraint(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint(),
        _ => None,
    }
}

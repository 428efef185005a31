//! Process-local implementation of every repository trait.
//!
//! Used when `database.provider = "memory"` and by the HTTP test suite.
//! Uniqueness and cascade rules mirror the PostgreSQL schema so services
//! behave the same against either backend.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use playerhub_core::error::AppError;
use playerhub_core::result::AppResult;
use playerhub_core::traits::Repository;
use playerhub_core::types::{AchievementId, PlayerAchievementId, PlayerId, UserId};
use playerhub_entity::achievement::{
    Achievement, CreateAchievement, NewPlayerAchievement, PlayerAchievement, UpdateAchievement,
};
use playerhub_entity::player::{CreatePlayer, PlayerProfile, UpdatePlayer};
use playerhub_entity::user::{CreateUser, UpdateUser, User};

use crate::repositories::{
    AchievementRepository, AwardRepository, PlayerRepository, UserRepository,
};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    players: BTreeMap<PlayerId, PlayerProfile>,
    achievements: BTreeMap<AchievementId, Achievement>,
    awards: Vec<PlayerAchievement>,
    last_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn check_user_unique(
        &self,
        username: &str,
        email: &str,
        except: Option<UserId>,
    ) -> AppResult<()> {
        for user in self.users.values().filter(|u| Some(u.id) != except) {
            if user.username.eq_ignore_ascii_case(username) {
                return Err(AppError::conflict("Username already exists"));
            }
            if user.email.eq_ignore_ascii_case(email) {
                return Err(AppError::conflict("Email already in use"));
            }
        }
        Ok(())
    }

    fn check_nickname_unique(&self, nickname: &str, except: Option<PlayerId>) -> AppResult<()> {
        if self
            .players
            .values()
            .any(|p| Some(p.id) != except && p.nickname == nickname)
        {
            return Err(AppError::conflict("Nickname already taken"));
        }
        Ok(())
    }

    fn check_achievement_unique(&self, name: &str, except: Option<AchievementId>) -> AppResult<()> {
        if self
            .achievements
            .values()
            .any(|a| Some(a.id) != except && a.name == name)
        {
            return Err(AppError::conflict("Achievement name already exists"));
        }
        Ok(())
    }

    fn remove_player(&mut self, id: PlayerId) -> bool {
        self.awards.retain(|a| a.player_id != id);
        self.players.remove(&id).is_some()
    }
}

/// All four repositories over a single lock.
///
/// Ids come from one shared sequence, so an id is never reused even
/// across tables.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<User, UserId, CreateUser, UpdateUser> for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.tables.read().await.users.values().cloned().collect())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        tables.check_user_unique(&data.username, &data.email, None)?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(tables.next_id()),
            username: data.username.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            age: data.age,
            role: data.role,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());
        debug!(user_id = %user.id, "Stored user in memory");
        Ok(user)
    }

    async fn update(&self, id: UserId, changes: &UpdateUser) -> AppResult<Option<User>> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&id) {
            return Ok(None);
        }
        tables.check_user_unique(&changes.username, &changes.email, Some(id))?;

        let Some(user) = tables.users.get_mut(&id) else {
            return Ok(None);
        };
        user.username = changes.username.clone();
        user.email = changes.email.clone();
        user.age = changes.age;
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: UserId) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        let owned: Vec<PlayerId> = tables
            .players
            .values()
            .filter(|p| p.user_id == id)
            .map(|p| p.id)
            .collect();
        for player_id in owned {
            tables.remove_player(player_id);
        }
        Ok(tables.users.remove(&id).is_some())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .cloned())
    }
}

#[async_trait]
impl Repository<PlayerProfile, PlayerId, CreatePlayer, UpdatePlayer> for MemoryStore {
    async fn find_by_id(&self, id: PlayerId) -> AppResult<Option<PlayerProfile>> {
        Ok(self.tables.read().await.players.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<PlayerProfile>> {
        Ok(self.tables.read().await.players.values().cloned().collect())
    }

    async fn create(&self, data: &CreatePlayer) -> AppResult<PlayerProfile> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&data.user_id) {
            return Err(AppError::not_found("User not found"));
        }
        tables.check_nickname_unique(&data.nickname, None)?;

        let now = Utc::now();
        let player = PlayerProfile {
            id: PlayerId::new(tables.next_id()),
            nickname: data.nickname.clone(),
            avatar: data.avatar.clone(),
            level: data.level,
            experience: data.experience,
            points: data.points,
            user_id: data.user_id,
            created_at: now,
            updated_at: now,
        };
        tables.players.insert(player.id, player.clone());
        Ok(player)
    }

    async fn update(
        &self,
        id: PlayerId,
        changes: &UpdatePlayer,
    ) -> AppResult<Option<PlayerProfile>> {
        let mut tables = self.tables.write().await;
        if !tables.players.contains_key(&id) {
            return Ok(None);
        }
        tables.check_nickname_unique(&changes.nickname, Some(id))?;

        let Some(player) = tables.players.get_mut(&id) else {
            return Ok(None);
        };
        player.nickname = changes.nickname.clone();
        player.avatar = changes.avatar.clone();
        player.level = changes.level;
        player.experience = changes.experience;
        player.points = changes.points;
        player.updated_at = Utc::now();
        Ok(Some(player.clone()))
    }

    async fn delete(&self, id: PlayerId) -> AppResult<bool> {
        Ok(self.tables.write().await.remove_player(id))
    }
}

impl PlayerRepository for MemoryStore {}

#[async_trait]
impl Repository<Achievement, AchievementId, CreateAchievement, UpdateAchievement>
    for MemoryStore
{
    async fn find_by_id(&self, id: AchievementId) -> AppResult<Option<Achievement>> {
        Ok(self.tables.read().await.achievements.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Achievement>> {
        Ok(self
            .tables
            .read()
            .await
            .achievements
            .values()
            .cloned()
            .collect())
    }

    async fn create(&self, data: &CreateAchievement) -> AppResult<Achievement> {
        let mut tables = self.tables.write().await;
        tables.check_achievement_unique(&data.name, None)?;

        let now = Utc::now();
        let achievement = Achievement {
            id: AchievementId::new(tables.next_id()),
            name: data.name.clone(),
            description: data.description.clone(),
            created_at: now,
            updated_at: now,
        };
        tables
            .achievements
            .insert(achievement.id, achievement.clone());
        Ok(achievement)
    }

    async fn update(
        &self,
        id: AchievementId,
        changes: &UpdateAchievement,
    ) -> AppResult<Option<Achievement>> {
        let mut tables = self.tables.write().await;
        if !tables.achievements.contains_key(&id) {
            return Ok(None);
        }
        tables.check_achievement_unique(&changes.name, Some(id))?;

        let Some(achievement) = tables.achievements.get_mut(&id) else {
            return Ok(None);
        };
        achievement.name = changes.name.clone();
        achievement.description = changes.description.clone();
        achievement.updated_at = Utc::now();
        Ok(Some(achievement.clone()))
    }

    async fn delete(&self, id: AchievementId) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        tables.awards.retain(|a| a.achievement_id != id);
        Ok(tables.achievements.remove(&id).is_some())
    }
}

impl AchievementRepository for MemoryStore {}

#[async_trait]
impl AwardRepository for MemoryStore {
    async fn award(&self, data: &NewPlayerAchievement) -> AppResult<PlayerAchievement> {
        let mut tables = self.tables.write().await;
        if !tables.players.contains_key(&data.player_id) {
            return Err(AppError::not_found("Player not found"));
        }
        if !tables.achievements.contains_key(&data.achievement_id) {
            return Err(AppError::not_found("Achievement not found"));
        }
        if tables
            .awards
            .iter()
            .any(|a| a.player_id == data.player_id && a.achievement_id == data.achievement_id)
        {
            return Err(AppError::conflict("Player already holds this achievement"));
        }

        let award = PlayerAchievement {
            id: PlayerAchievementId::new(tables.next_id()),
            player_id: data.player_id,
            achievement_id: data.achievement_id,
            created_at: Utc::now(),
        };
        tables.awards.push(award.clone());
        Ok(award)
    }

    async fn revoke(&self, player_id: PlayerId, achievement_id: AchievementId) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.awards.len();
        tables
            .awards
            .retain(|a| !(a.player_id == player_id && a.achievement_id == achievement_id));
        Ok(tables.awards.len() < before)
    }

    async fn achievements_for_player(&self, player_id: PlayerId) -> AppResult<Vec<Achievement>> {
        let tables = self.tables.read().await;
        Ok(tables
            .awards
            .iter()
            .filter(|a| a.player_id == player_id)
            .filter_map(|a| tables.achievements.get(&a.achievement_id).cloned())
            .collect())
    }

    async fn players_for_achievement(
        &self,
        achievement_id: AchievementId,
    ) -> AppResult<Vec<PlayerProfile>> {
        let tables = self.tables.read().await;
        Ok(tables
            .awards
            .iter()
            .filter(|a| a.achievement_id == achievement_id)
            .filter_map(|a| tables.players.get(&a.player_id).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playerhub_core::error::ErrorKind;
    use playerhub_entity::user::UserRole;

    fn new_user(username: &str, email: &str) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$stub".to_string(),
            age: 30,
            role: UserRole::User,
        }
    }

    fn new_player(nickname: &str, user_id: UserId) -> CreatePlayer {
        CreatePlayer {
            nickname: nickname.to_string(),
            avatar: String::new(),
            level: 1,
            experience: 0,
            points: 0,
            user_id,
        }
    }

    async fn seed_user(store: &MemoryStore, username: &str) -> User {
        store.create(&new_user(username, &format!("{username}@example.com")))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_user_email_lookup_is_case_insensitive() {
        let store = MemoryStore::new();
        let alice = seed_user(&store, "alice").await;

        let found = store.find_by_email("ALICE@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(alice.id));
        assert!(store.find_by_email("bob@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let store = MemoryStore::new();
        seed_user(&store, "alice").await;

        let err = store.create(&new_user("alice2", "Alice@Example.com"))
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::Conflict));
    }

    #[tokio::test]
    async fn test_update_missing_user_returns_none() {
        let store = MemoryStore::new();
        let changes = UpdateUser {
            username: "ghost".to_string(),
            email: "ghost@example.com".to_string(),
            age: 1,
        };
        let updated = Repository::<User, _, _, _>::update(&store, UserId::new(99), &changes)
            .await
            .unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_player_requires_existing_user() {
        let store = MemoryStore::new();
        let err = store.create(&new_player("nobody", UserId::new(42)))
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_award_lifecycle() {
        let store = MemoryStore::new();
        let alice = seed_user(&store, "alice").await;
        let player = store.create(&new_player("ace", alice.id))
            .await
            .unwrap();
        let badge = store.create(&CreateAchievement {
                name: "First Blood".to_string(),
                description: "Win a match".to_string(),
            },
        )
        .await
        .unwrap();

        let pair = NewPlayerAchievement {
            player_id: player.id,
            achievement_id: badge.id,
        };
        store.award(&pair).await.unwrap();
        let again = store.award(&pair).await.unwrap_err();
        assert!(again.is(ErrorKind::Conflict));

        let held = store.achievements_for_player(player.id).await.unwrap();
        assert_eq!(held.len(), 1);
        let holders = store.players_for_achievement(badge.id).await.unwrap();
        assert_eq!(holders[0].id, player.id);

        assert!(store.revoke(player.id, badge.id).await.unwrap());
        assert!(!store.revoke(player.id, badge.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_deleting_user_cascades_to_players_and_awards() {
        let store = MemoryStore::new();
        let alice = seed_user(&store, "alice").await;
        let player = store.create(&new_player("ace", alice.id))
            .await
            .unwrap();
        let badge = store.create(&CreateAchievement {
                name: "Veteran".to_string(),
                description: "Play 100 matches".to_string(),
            },
        )
        .await
        .unwrap();
        store
            .award(&NewPlayerAchievement {
                player_id: player.id,
                achievement_id: badge.id,
            })
            .await
            .unwrap();

        assert!(store.delete(alice.id).await.unwrap());
        assert!(
            Repository::<PlayerProfile, _, _, _>::find_by_id(&store, player.id)
                .await
                .unwrap()
                .is_none()
        );
        assert!(store.players_for_achievement(badge.id).await.unwrap().is_empty());
    }
}

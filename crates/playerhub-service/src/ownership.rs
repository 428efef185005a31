//! Owner resolvers for the ownership gate, one per resource family.

use std::sync::Arc;

use async_trait::async_trait;

use playerhub_auth::OwnerResolver;
use playerhub_core::error::AppError;
use playerhub_core::result::AppResult;
use playerhub_core::traits::Repository;
use playerhub_core::types::{PlayerId, UserId};
use playerhub_database::{PlayerRepository, UserRepository};

/// A player profile is owned by the user recorded at creation.
#[derive(Clone)]
pub struct PlayerOwnerResolver {
    players: Arc<dyn PlayerRepository>,
}

impl PlayerOwnerResolver {
    /// Creates a resolver over the player repository.
    pub fn new(players: Arc<dyn PlayerRepository>) -> Self {
        Self { players }
    }
}

#[async_trait]
impl OwnerResolver for PlayerOwnerResolver {
    fn resource_name(&self) -> &'static str {
        "player"
    }

    async fn resolve_owner(&self, id: i64) -> AppResult<UserId> {
        self.players
            .find_by_id(PlayerId::new(id))
            .await?
            .map(|player| player.owner())
            .ok_or_else(|| AppError::not_found("Player not found"))
    }
}

/// A user account is owned by itself.
#[derive(Clone)]
pub struct UserOwnerResolver {
    users: Arc<dyn UserRepository>,
}

impl UserOwnerResolver {
    /// Creates a resolver over the user repository.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl OwnerResolver for UserOwnerResolver {
    fn resource_name(&self) -> &'static str {
        "user"
    }

    async fn resolve_owner(&self, id: i64) -> AppResult<UserId> {
        self.users
            .find_by_id(UserId::new(id))
            .await?
            .map(|user| user.id)
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}

//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use playerhub_auth::{
    Argon2PasswordHasher, CredentialVerifier, OwnershipGate, PasswordHasher, RoleGate,
    SessionIssuer, TokenCodec,
};
use playerhub_core::config::AppConfig;
use playerhub_core::error::AppError;
use playerhub_database::repositories::{
    PgAchievementRepository, PgAwardRepository, PgPlayerRepository, PgUserRepository,
};
use playerhub_database::{
    AchievementRepository, AwardRepository, DatabasePool, MemoryStore, PlayerRepository,
    UserRepository,
};
use playerhub_entity::user::UserRole;
use playerhub_service::{
    AchievementService, PlayerOwnerResolver, PlayerService, UserOwnerResolver, UserService,
};

/// The repository set the application runs against.
#[derive(Clone)]
pub struct Repositories {
    /// User accounts.
    pub users: Arc<dyn UserRepository>,
    /// Player profiles.
    pub players: Arc<dyn PlayerRepository>,
    /// Achievements.
    pub achievements: Arc<dyn AchievementRepository>,
    /// Achievement awards.
    pub awards: Arc<dyn AwardRepository>,
}

impl Repositories {
    /// Postgres-backed repositories sharing one pool.
    pub fn postgres(pool: &DatabasePool) -> Self {
        let pool = pool.pool().clone();
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            players: Arc::new(PgPlayerRepository::new(pool.clone())),
            achievements: Arc::new(PgAchievementRepository::new(pool.clone())),
            awards: Arc::new(PgAwardRepository::new(pool)),
        }
    }

    /// Process-local repositories backed by one [`MemoryStore`].
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: store.clone(),
            players: store.clone(),
            achievements: store.clone(),
            awards: store,
        }
    }
}

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// Token minting, validation and revocation
    pub token_codec: TokenCodec,
    /// Login orchestration
    pub session_issuer: SessionIssuer,
    /// Admin-only gate
    pub role_gate: RoleGate,
    /// Ownership gate for `/players/{id}`
    pub player_gate: OwnershipGate,
    /// Ownership gate for `/users/{id}`
    pub user_gate: OwnershipGate,

    // ── Services ─────────────────────────────────────────────
    /// User accounts
    pub user_service: Arc<UserService>,
    /// Player profiles
    pub player_service: Arc<PlayerService>,
    /// Achievements and awards
    pub achievement_service: Arc<AchievementService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("player_gate", &self.player_gate)
            .field("user_gate", &self.user_gate)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Wires the auth chain and services over `repos`.
    ///
    /// Fails when the auth section is invalid or `default_role` is not a
    /// known role.
    pub fn new(config: AppConfig, repos: Repositories) -> Result<Self, AppError> {
        let default_role: UserRole = config.auth.default_role.parse().map_err(|_| {
            AppError::configuration(format!(
                "auth.default_role '{}' is not a known role",
                config.auth.default_role
            ))
        })?;

        let token_codec = TokenCodec::from_config(&config.auth)?;
        let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());

        let verifier = CredentialVerifier::new(repos.users.clone(), hasher.clone());
        let session_issuer = SessionIssuer::new(verifier, token_codec.clone());

        let player_gate =
            OwnershipGate::new(Arc::new(PlayerOwnerResolver::new(repos.players.clone())));
        let user_gate = OwnershipGate::new(Arc::new(UserOwnerResolver::new(repos.users.clone())));

        let user_service = Arc::new(UserService::new(
            repos.users.clone(),
            hasher,
            default_role,
        ));
        let player_service = Arc::new(PlayerService::new(
            repos.players.clone(),
            repos.users.clone(),
            repos.awards.clone(),
        ));
        let achievement_service = Arc::new(AchievementService::new(
            repos.achievements.clone(),
            repos.awards.clone(),
        ));

        Ok(Self {
            config: Arc::new(config),
            token_codec,
            session_issuer,
            role_gate: RoleGate::new(),
            player_gate,
            user_gate,
            user_service,
            player_service,
            achievement_service,
        })
    }

    /// State over fresh in-memory repositories.
    pub fn in_memory(config: AppConfig) -> Result<Self, AppError> {
        Self::new(config, Repositories::in_memory())
    }
}

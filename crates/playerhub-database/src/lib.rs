//! # playerhub-database
//!
//! PostgreSQL connection management, the repository traits every service
//! depends on, and two implementations of them: sqlx-backed repositories
//! and a process-local in-memory store.

pub mod connection;
pub mod memory;
pub mod repositories;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use repositories::{
    AchievementRepository, AwardRepository, PlayerRepository, UserRepository,
};

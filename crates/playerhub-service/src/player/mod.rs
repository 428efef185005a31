//! Player profile management.

pub mod service;

pub use service::{CreatePlayerRequest, PlayerService, PlayerWithAchievements, UpdatePlayerRequest};

//! Achievement catalogue and awards.

pub mod service;

pub use service::{
    AchievementService, AchievementWithPlayers, CreateAchievementRequest,
    UpdateAchievementRequest,
};

//! Achievement entities and player awards.

pub mod award;
pub mod model;

pub use award::{NewPlayerAchievement, PlayerAchievement};
pub use model::{Achievement, CreateAchievement, UpdateAchievement};

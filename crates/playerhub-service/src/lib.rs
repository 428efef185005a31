//! # playerhub-service
//!
//! Business logic service layer for PlayerHub. Each service orchestrates
//! repositories behind their traits to implement the CRUD use cases for
//! users, player profiles and achievements.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod achievement;
pub mod context;
pub mod ownership;
pub mod player;
pub mod user;

pub use achievement::{AchievementService, AchievementWithPlayers};
pub use context::RequestContext;
pub use ownership::{PlayerOwnerResolver, UserOwnerResolver};
pub use player::{PlayerService, PlayerWithAchievements};
pub use user::UserService;

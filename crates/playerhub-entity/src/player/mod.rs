//! Player profile entities.

pub mod model;

pub use model::{CreatePlayer, PlayerProfile, UpdatePlayer};

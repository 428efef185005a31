//! Route handlers organized by domain.

pub mod achievement;
pub mod auth;
pub mod health;
pub mod player;
pub mod user;

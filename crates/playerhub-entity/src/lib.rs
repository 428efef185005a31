//! # playerhub-entity
//!
//! Domain entity models for PlayerHub. Every struct in this crate
//! represents a database table row or the payload used to create or
//! change one. Row types additionally derive `sqlx::FromRow`.

pub mod achievement;
pub mod player;
pub mod user;

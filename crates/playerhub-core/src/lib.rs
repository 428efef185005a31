//! # playerhub-core
//!
//! Core crate for PlayerHub. Contains the configuration schemas, typed
//! integer identifiers, the generic repository trait, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other PlayerHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;

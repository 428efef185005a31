//! Core traits defined in `playerhub-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;

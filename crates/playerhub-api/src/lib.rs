//! # playerhub-api
//!
//! HTTP API layer for PlayerHub built on Axum.
//!
//! Provides the REST endpoints, the authentication gate, role and
//! ownership middleware, extractors, DTOs, and the mapping from
//! [`playerhub_core::AppError`] onto the response envelope.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use error::{ApiError, ApiResult};
pub use state::{AppState, Repositories};

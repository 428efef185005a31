//! Convenience result type alias for PlayerHub.

use crate::error::AppError;

/// A specialized `Result` type for PlayerHub operations.
pub type AppResult<T> = Result<T, AppError>;

//! Core type definitions used across the PlayerHub workspace.

pub mod id;
pub mod response;

pub use id::*;
pub use response::BaseResponse;

//! User registration and account management.

pub mod service;

pub use service::{RegisterUser, UpdateUserRequest, UserService};

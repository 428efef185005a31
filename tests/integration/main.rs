//! HTTP-level integration tests against the in-memory repositories.

mod helpers;

mod auth_test;
mod permission_test;
mod user_test;

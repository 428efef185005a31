//! Role-based gate for administrative actions.

pub mod enforcer;

pub use enforcer::RoleGate;

//! Ownership gate for resource-scoped actions.

pub mod checker;
pub mod resolver;

pub use checker::OwnershipGate;
pub use resolver::OwnerResolver;

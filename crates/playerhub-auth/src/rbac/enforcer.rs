//! Role gate: admins only.

use tracing::debug;

use crate::context::{AccessDecision, Denial, RequestIdentity};

/// Allows a request iff the caller is an admin.
///
/// A pure function of the role; the target resource is never consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleGate;

impl RoleGate {
    /// Creates a role gate.
    pub fn new() -> Self {
        Self
    }

    /// Decides whether `identity` may perform an administrative action.
    pub fn allow(&self, identity: &RequestIdentity) -> AccessDecision {
        if identity.is_admin() {
            AccessDecision::Allow
        } else {
            debug!(user_id = %identity.subject, role = %identity.role, "Role gate denied request");
            AccessDecision::Deny(Denial::Forbidden)
        }
    }
}

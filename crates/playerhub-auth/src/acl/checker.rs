//! Ownership gate: admins bypass, everyone else must own the resource.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::context::{AccessDecision, Denial, RequestIdentity};

use super::resolver::OwnerResolver;

/// Ownership check for one resource family.
#[derive(Clone)]
pub struct OwnershipGate {
    resolver: Arc<dyn OwnerResolver>,
}

impl std::fmt::Debug for OwnershipGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnershipGate")
            .field("resource", &self.resolver.resource_name())
            .finish()
    }
}

impl OwnershipGate {
    /// Creates a gate using `resolver` to look up owners.
    pub fn new(resolver: Arc<dyn OwnerResolver>) -> Self {
        Self { resolver }
    }

    /// Decides whether `identity` may act on the resource identified by
    /// the raw path segment `resource_id`.
    ///
    /// Steps, short-circuiting:
    /// 1. admins are allowed without any lookup;
    /// 2. an id that is not a positive integer is a bad request;
    /// 3. a failed owner lookup is not found;
    /// 4. otherwise allowed iff the owner is the caller.
    pub async fn allow(&self, identity: &RequestIdentity, resource_id: &str) -> AccessDecision {
        if identity.is_admin() {
            return AccessDecision::Allow;
        }

        let resource = self.resolver.resource_name();
        let id = match resource_id.parse::<i64>() {
            Ok(id) if id > 0 => id,
            _ => {
                return AccessDecision::Deny(Denial::BadRequest(format!(
                    "Invalid {resource} ID"
                )));
            }
        };

        let owner = match self.resolver.resolve_owner(id).await {
            Ok(owner) => owner,
            Err(e) => {
                warn!(resource, id, error = %e, "Owner lookup failed");
                return AccessDecision::Deny(Denial::NotFound(format!(
                    "{} not found",
                    capitalize(resource)
                )));
            }
        };

        if owner == identity.subject {
            AccessDecision::Allow
        } else {
            debug!(
                resource,
                id,
                user_id = %identity.subject,
                owner_id = %owner,
                "Ownership gate denied request"
            );
            AccessDecision::Deny(Denial::Forbidden)
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};

use playerhub_auth::RequestIdentity;
use playerhub_core::types::UserId;
use playerhub_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Passed into service methods whose outcome depends on *who* is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The user's role at the time the token was issued.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, role: UserRole) -> Self {
        Self {
            user_id,
            role,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<RequestIdentity> for RequestContext {
    fn from(identity: RequestIdentity) -> Self {
        Self::new(identity.subject, identity.role)
    }
}

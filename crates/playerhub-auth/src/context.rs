//! Request-scoped identity and authorization decisions.

use std::fmt;

use playerhub_core::error::AppError;
use playerhub_core::types::UserId;
use playerhub_entity::user::UserRole;

use crate::jwt::IdentityClaim;

/// Who is making the current request.
///
/// Built from a validated token and dropped when the request completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestIdentity {
    /// The authenticated user.
    pub subject: UserId,
    /// The user's role.
    pub role: UserRole,
}

impl RequestIdentity {
    /// Creates an identity.
    pub fn new(subject: UserId, role: UserRole) -> Self {
        Self { subject, role }
    }

    /// Whether this identity bypasses ownership checks.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&IdentityClaim> for RequestIdentity {
    fn from(claim: &IdentityClaim) -> Self {
        Self::new(claim.subject, claim.role)
    }
}

/// Outcome of an authorization policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// The request may proceed.
    Allow,
    /// The request is rejected.
    Deny(Denial),
}

impl AccessDecision {
    /// Whether the decision is [`AccessDecision::Allow`].
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Converts the decision into a `Result` for `?` propagation.
    pub fn into_result(self) -> Result<(), AppError> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(denial) => Err(denial.into()),
        }
    }
}

/// Why a request was denied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    /// Authenticated but lacking privilege or ownership.
    Forbidden,
    /// The resource identifier could not be parsed.
    BadRequest(String),
    /// The resource owner could not be resolved.
    NotFound(String),
}

/// Message returned for every privilege or ownership denial.
pub const FORBIDDEN_MESSAGE: &str = "You are not allowed to perform this action";

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forbidden => f.write_str(FORBIDDEN_MESSAGE),
            Self::BadRequest(message) | Self::NotFound(message) => f.write_str(message),
        }
    }
}

impl From<Denial> for AppError {
    fn from(denial: Denial) -> Self {
        match denial {
            Denial::Forbidden => AppError::authorization(FORBIDDEN_MESSAGE),
            Denial::BadRequest(message) => AppError::validation(message),
            Denial::NotFound(message) => AppError::not_found(message),
        }
    }
}

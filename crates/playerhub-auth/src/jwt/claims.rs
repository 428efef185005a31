//! JWT claims structure and the validated identity extracted from it.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use playerhub_core::types::UserId;
use playerhub_entity::user::UserRole;

use super::error::TokenError;

/// Wire payload of every token.
///
/// `sub` and `role` stay plain strings here so that an unknown role or a
/// non-numeric subject is reported as a malformed token instead of a
/// generic deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the user id in decimal.
    pub sub: String,
    /// Role at the time of issuance.
    pub role: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token id, used for revocation.
    pub jti: Uuid,
}

impl Claims {
    /// Builds the claims for a new token.
    pub fn new(
        subject: UserId,
        role: UserRole,
        issued_at: DateTime<Utc>,
        ttl: chrono::Duration,
    ) -> Self {
        Self {
            sub: subject.to_string(),
            role: role.as_str().to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
            jti: Uuid::new_v4(),
        }
    }

    /// Parses the raw claims into a typed identity.
    pub fn into_identity(self) -> Result<IdentityClaim, TokenError> {
        let subject = UserId::from_str(&self.sub).map_err(|_| TokenError::Malformed)?;
        let role = UserRole::from_str(&self.role).map_err(|_| TokenError::Malformed)?;
        let expires_at = DateTime::from_timestamp(self.exp, 0).ok_or(TokenError::Malformed)?;

        Ok(IdentityClaim {
            subject,
            role,
            expires_at,
            token_id: self.jti,
        })
    }
}

/// A validated token's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaim {
    /// The authenticated user.
    pub subject: UserId,
    /// The user's role.
    pub role: UserRole,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
    /// The token's `jti`.
    pub token_id: Uuid,
}

//! Token minting.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, Header, encode};

use playerhub_core::types::UserId;
use playerhub_entity::user::UserRole;

use super::claims::Claims;
use super::error::TokenError;
use super::keys::KeyRing;

/// Signs HS256 tokens with the ring's active key.
#[derive(Debug, Clone)]
pub struct JwtEncoder {
    keys: Arc<KeyRing>,
    ttl: chrono::Duration,
}

impl JwtEncoder {
    /// Creates an encoder issuing tokens valid for `ttl`.
    pub fn new(keys: Arc<KeyRing>, ttl: chrono::Duration) -> Self {
        Self { keys, ttl }
    }

    /// Key id stamped into new tokens.
    pub fn key_id(&self) -> &str {
        self.keys.active_kid()
    }

    /// Mints a token for `subject` expiring one TTL from now.
    pub fn mint(&self, subject: UserId, role: UserRole) -> Result<String, TokenError> {
        self.mint_at(subject, role, Utc::now())
    }

    /// Mints a token as if issued at `issued_at`.
    pub fn mint_at(
        &self,
        subject: UserId,
        role: UserRole,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(subject, role, issued_at, self.ttl);

        let mut header = Header::new(Algorithm::HS256);
        header.kid = Some(self.keys.active_kid().to_string());

        encode(&header, &claims, self.keys.encoding_key())
            .map_err(|e| TokenError::Signing(e.to_string()))
    }
}

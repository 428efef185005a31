//! Mint, validate and revoke tokens through one handle.

use std::sync::Arc;

use tracing::debug;

use playerhub_core::config::AuthConfig;
use playerhub_core::error::AppError;
use playerhub_core::types::UserId;
use playerhub_entity::user::UserRole;

use super::claims::IdentityClaim;
use super::decoder::JwtDecoder;
use super::denylist::TokenDenylist;
use super::encoder::JwtEncoder;
use super::error::TokenError;
use super::keys::KeyRing;

/// The token codec shared by login, the authentication gate and logout.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    denylist: TokenDenylist,
}

impl TokenCodec {
    /// Builds a codec from its parts.
    pub fn new(encoder: JwtEncoder, decoder: JwtDecoder, denylist: TokenDenylist) -> Self {
        Self {
            encoder,
            decoder,
            denylist,
        }
    }

    /// Builds the key ring, encoder, decoder and denylist from configuration.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AppError> {
        let keys = Arc::new(KeyRing::from_config(config)?);
        let ttl = i64::try_from(config.token_ttl_hours)
            .ok()
            .and_then(chrono::Duration::try_hours)
            .ok_or_else(|| AppError::configuration("auth.token_ttl_hours is out of range"))?;

        Ok(Self::new(
            JwtEncoder::new(keys.clone(), ttl),
            JwtDecoder::new(keys, config.leeway_seconds),
            TokenDenylist::new(config.denylist_capacity, config.leeway_seconds),
        ))
    }

    /// Mints a signed token for the subject.
    pub fn mint(&self, subject: UserId, role: UserRole) -> Result<String, TokenError> {
        self.encoder.mint(subject, role)
    }

    /// Checks signature, algorithm, key id, expiry and claims.
    ///
    /// Does not consult the denylist; see [`TokenCodec::authenticate`].
    pub fn validate(&self, token: &str) -> Result<IdentityClaim, TokenError> {
        self.decoder.validate(token)
    }

    /// Full validation for an inbound request, including revocation.
    pub async fn authenticate(&self, token: &str) -> Result<IdentityClaim, TokenError> {
        let claim = self.validate(token)?;
        if self.denylist.is_revoked(&claim.token_id).await {
            debug!(user_id = %claim.subject, token_id = %claim.token_id, "Rejected revoked token");
            return Err(TokenError::Revoked);
        }
        Ok(claim)
    }

    /// Revokes a validated token until its natural expiry.
    pub async fn revoke(&self, claim: &IdentityClaim) -> Result<(), TokenError> {
        self.denylist.revoke(claim).await
    }

    /// The encoder, for callers that need to control the issue time.
    pub fn encoder(&self) -> &JwtEncoder {
        &self.encoder
    }
}

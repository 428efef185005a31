//! Revoked token ids, held until the token would have expired anyway.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use moka::Expiry;
use moka::future::Cache;
use tracing::{debug, warn};
use uuid::Uuid;

use playerhub_core::config::MAX_LEEWAY_SECONDS;

use super::claims::IdentityClaim;
use super::error::TokenError;

/// Per-entry expiry: an entry lives until its token's `exp` plus the
/// validation leeway.
struct UntilTokenExpiry;

impl Expiry<Uuid, DateTime<Utc>> for UntilTokenExpiry {
    fn expire_after_create(
        &self,
        _key: &Uuid,
        value: &DateTime<Utc>,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some((*value - Utc::now()).to_std().unwrap_or(Duration::ZERO))
    }
}

/// In-memory set of revoked `jti` values.
///
/// The cache never evicts by size, so an admitted revocation holds until
/// its token expires. Capacity is enforced on insert instead: once full,
/// [`TokenDenylist::revoke`] refuses rather than dropping an entry.
#[derive(Clone)]
pub struct TokenDenylist {
    entries: Cache<Uuid, DateTime<Utc>>,
    capacity: u64,
    leeway: chrono::Duration,
}

impl std::fmt::Debug for TokenDenylist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDenylist")
            .field("entries", &self.entries.entry_count())
            .field("capacity", &self.capacity)
            .field("leeway", &self.leeway)
            .finish()
    }
}

impl TokenDenylist {
    /// Creates a denylist holding at most `capacity` ids.
    pub fn new(capacity: u64, leeway_seconds: u64) -> Self {
        let entries = Cache::builder().expire_after(UntilTokenExpiry).build();

        Self {
            entries,
            capacity,
            leeway: chrono::Duration::seconds(leeway_seconds.min(MAX_LEEWAY_SECONDS) as i64),
        }
    }

    /// Blocks the token described by `claim` for the rest of its lifetime.
    ///
    /// Revoking an id twice is a no-op. Fails with
    /// [`TokenError::DenylistFull`] when no room is left.
    pub async fn revoke(&self, claim: &IdentityClaim) -> Result<(), TokenError> {
        if self.entries.contains_key(&claim.token_id) {
            return Ok(());
        }

        // Flushes pending writes and purges expired entries so the count is current.
        self.entries.run_pending_tasks().await;
        if self.entries.entry_count() >= self.capacity {
            warn!(
                capacity = self.capacity,
                token_id = %claim.token_id,
                "Token denylist is full, refusing revocation"
            );
            return Err(TokenError::DenylistFull);
        }

        let until = claim.expires_at + self.leeway;
        self.entries.insert(claim.token_id, until).await;
        debug!(token_id = %claim.token_id, until = %until, "Token revoked");
        Ok(())
    }

    /// Whether the token id has been revoked.
    pub async fn is_revoked(&self, token_id: &Uuid) -> bool {
        self.entries.get(token_id).await.is_some()
    }
}

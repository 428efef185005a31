//! Authentication configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Minimum accepted length of an HMAC signing secret, in bytes.
pub const MIN_SECRET_BYTES: usize = 32;

/// Longest accepted token lifetime, one year.
pub const MAX_TOKEN_TTL_HOURS: u64 = 24 * 365;

/// Largest accepted clock-skew allowance on `exp`.
pub const MAX_LEEWAY_SECONDS: u64 = 300;

/// Authentication and token configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Active HMAC-SHA256 signing secret. Required; there is no default.
    pub jwt_secret: String,
    /// Key id stamped into the `kid` header of newly minted tokens.
    #[serde(default = "default_key_id")]
    pub key_id: String,
    /// Retired keys that are still accepted for validation during rotation.
    #[serde(default)]
    pub previous_keys: Vec<SigningKeyConfig>,
    /// Token lifetime in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Clock-skew allowance applied to `exp` checks, in seconds. Zero means
    /// a token is rejected as soon as its expiry has passed.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
    /// Maximum number of revoked token ids kept in memory.
    #[serde(default = "default_denylist_capacity")]
    pub denylist_capacity: u64,
    /// Role assigned to self-registered users.
    #[serde(default = "default_role")]
    pub default_role: String,
}

/// A retired signing key accepted for validation only.
#[derive(Clone, Serialize, Deserialize)]
pub struct SigningKeyConfig {
    /// Key id matched against the token's `kid` header.
    pub key_id: String,
    /// HMAC secret for this key id.
    pub secret: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("key_id", &self.key_id)
            .field("previous_keys", &self.previous_keys)
            .field("token_ttl_hours", &self.token_ttl_hours)
            .field("leeway_seconds", &self.leeway_seconds)
            .field("denylist_capacity", &self.denylist_capacity)
            .field("default_role", &self.default_role)
            .finish()
    }
}

impl std::fmt::Debug for SigningKeyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKeyConfig")
            .field("key_id", &self.key_id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl AuthConfig {
    /// Builds a configuration with the given secret and default settings.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            key_id: default_key_id(),
            previous_keys: Vec::new(),
            token_ttl_hours: default_token_ttl(),
            leeway_seconds: default_leeway(),
            denylist_capacity: default_denylist_capacity(),
            default_role: default_role(),
        }
    }

    /// Rejects weak secrets, empty or duplicate key ids, and an out-of-range
    /// TTL or leeway.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt_secret.len() < MIN_SECRET_BYTES {
            return Err(AppError::configuration(format!(
                "auth.jwt_secret must be at least {MIN_SECRET_BYTES} bytes"
            )));
        }

        if self.token_ttl_hours == 0 || self.token_ttl_hours > MAX_TOKEN_TTL_HOURS {
            return Err(AppError::configuration(format!(
                "auth.token_ttl_hours must be between 1 and {MAX_TOKEN_TTL_HOURS}"
            )));
        }

        if self.leeway_seconds > MAX_LEEWAY_SECONDS {
            return Err(AppError::configuration(format!(
                "auth.leeway_seconds must be at most {MAX_LEEWAY_SECONDS}"
            )));
        }

        let mut seen = HashSet::new();
        let ids = std::iter::once(&self.key_id).chain(self.previous_keys.iter().map(|k| &k.key_id));
        for id in ids {
            if id.trim().is_empty() {
                return Err(AppError::configuration("auth key ids must not be empty"));
            }
            if !seen.insert(id.as_str()) {
                return Err(AppError::configuration(format!(
                    "auth key id '{id}' is configured more than once"
                )));
            }
        }

        for key in &self.previous_keys {
            if key.secret.len() < MIN_SECRET_BYTES {
                return Err(AppError::configuration(format!(
                    "auth.previous_keys['{}'] secret must be at least {MIN_SECRET_BYTES} bytes",
                    key.key_id
                )));
            }
        }

        Ok(())
    }
}

fn default_key_id() -> String {
    "primary".to_string()
}

fn default_token_ttl() -> u64 {
    72
}

fn default_leeway() -> u64 {
    0
}

fn default_denylist_capacity() -> u64 {
    100_000
}

fn default_role() -> String {
    "user".to_string()
}

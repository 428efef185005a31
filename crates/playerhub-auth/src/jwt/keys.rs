//! HMAC signing keys indexed by key id.

use std::collections::HashMap;

use jsonwebtoken::{DecodingKey, EncodingKey};

use playerhub_core::config::AuthConfig;
use playerhub_core::error::AppError;

/// The active signing key plus any retired keys still accepted for
/// validation.
///
/// New tokens are always signed with the active key and carry its id in
/// the `kid` header. Validation looks the `kid` up here, so rotating a key
/// means moving the old secret into `previous_keys` until every token it
/// signed has expired.
#[derive(Clone)]
pub struct KeyRing {
    active_kid: String,
    encoding: EncodingKey,
    decoding: HashMap<String, DecodingKey>,
}

impl std::fmt::Debug for KeyRing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kids: Vec<&str> = self.decoding.keys().map(String::as_str).collect();
        kids.sort_unstable();
        f.debug_struct("KeyRing")
            .field("active_kid", &self.active_kid)
            .field("accepted_kids", &kids)
            .finish()
    }
}

impl KeyRing {
    /// A ring holding a single active key.
    pub fn new(kid: impl Into<String>, secret: &[u8]) -> Self {
        let kid = kid.into();
        let mut decoding = HashMap::new();
        decoding.insert(kid.clone(), DecodingKey::from_secret(secret));
        Self {
            active_kid: kid,
            encoding: EncodingKey::from_secret(secret),
            decoding,
        }
    }

    /// Builds the ring from validated auth configuration.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AppError> {
        config.validate()?;

        let mut ring = Self::new(config.key_id.clone(), config.jwt_secret.as_bytes());
        for key in &config.previous_keys {
            ring = ring.with_retired(key.key_id.clone(), key.secret.as_bytes());
        }
        Ok(ring)
    }

    /// Adds a validate-only key.
    pub fn with_retired(mut self, kid: impl Into<String>, secret: &[u8]) -> Self {
        let kid = kid.into();
        if kid != self.active_kid {
            self.decoding.insert(kid, DecodingKey::from_secret(secret));
        }
        self
    }

    /// Id of the key new tokens are signed with.
    pub fn active_kid(&self) -> &str {
        &self.active_kid
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    /// Verification key for a `kid`, if it is accepted.
    pub(crate) fn decoding_key(&self, kid: &str) -> Option<&DecodingKey> {
        self.decoding.get(kid)
    }

    /// Verification key of the active signing key.
    pub(crate) fn active_decoding_key(&self) -> Option<&DecodingKey> {
        self.decoding.get(&self.active_kid)
    }
}

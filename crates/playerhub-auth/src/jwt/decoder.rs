//! Token validation.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, Validation, decode, decode_header};

use super::claims::{Claims, IdentityClaim};
use super::error::TokenError;
use super::keys::KeyRing;

/// Verifies HS256 tokens against the key ring.
#[derive(Debug, Clone)]
pub struct JwtDecoder {
    keys: Arc<KeyRing>,
    validation: Validation,
}

impl JwtDecoder {
    /// Creates a decoder allowing `leeway_seconds` of clock skew on `exp`.
    pub fn new(keys: Arc<KeyRing>, leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = leeway_seconds;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self { keys, validation }
    }

    /// Validates a raw token string (without the `Bearer ` prefix).
    ///
    /// The algorithm is checked against the header before any key is
    /// touched, so an RS256 or `none` token never reaches HMAC verification.
    /// A token without a `kid` is verified against the active key; a `kid`
    /// the ring does not hold is rejected outright.
    pub fn validate(&self, token: &str) -> Result<IdentityClaim, TokenError> {
        let header = decode_header(token).map_err(|_| TokenError::Malformed)?;
        if header.alg != Algorithm::HS256 {
            return Err(TokenError::UnexpectedAlgorithm);
        }

        let key = match header.kid.as_deref() {
            Some(kid) => self.keys.decoding_key(kid),
            None => self.keys.active_decoding_key(),
        }
        .ok_or(TokenError::UnknownKey)?;

        let data = decode::<Claims>(token, key, &self.validation).map_err(TokenError::from_jwt)?;
        data.claims.into_identity()
    }
}

//! Token failure causes.

use thiserror::Error;

use playerhub_core::error::AppError;

/// Why a token could not be minted or accepted.
///
/// Callers at the HTTP edge collapse every validation cause into a single
/// "Invalid token" message; the variants exist for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not a structurally valid JWT, or required claims are missing or invalid.
    #[error("token is malformed")]
    Malformed,
    /// The signature does not match any accepted key.
    #[error("token signature is invalid")]
    BadSignature,
    /// The token is past its expiry.
    #[error("token has expired")]
    Expired,
    /// The header names an algorithm other than HS256.
    #[error("token uses an unexpected signing algorithm")]
    UnexpectedAlgorithm,
    /// The header names a `kid` that is not in the key ring.
    #[error("token was signed with an unknown key")]
    UnknownKey,
    /// The token id is on the denylist.
    #[error("token has been revoked")]
    Revoked,
    /// The denylist has no room for another revocation.
    #[error("token denylist is full")]
    DenylistFull,
    /// Signing a new token failed.
    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl TokenError {
    pub(crate) fn from_jwt(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::BadSignature,
            ErrorKind::InvalidAlgorithm => Self::UnexpectedAlgorithm,
            _ => Self::Malformed,
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(reason) => {
                AppError::token_issuance(format!("Failed to issue token: {reason}"))
            }
            TokenError::DenylistFull => {
                AppError::unavailable("Logout is temporarily unavailable, try again later")
            }
            _ => AppError::authentication("Invalid token"),
        }
    }
}

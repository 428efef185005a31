//! Login: credentials in, signed token out.

use tracing::{info, warn};

use playerhub_core::error::{AppError, ErrorKind};
use playerhub_core::result::AppResult;
use playerhub_entity::user::User;

use crate::jwt::TokenCodec;

use super::verifier::CredentialVerifier;

/// Message for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// A successful login.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    /// The signed bearer token.
    pub token: String,
    /// The authenticated user.
    pub user: User,
}

/// Orchestrates login.
#[derive(Debug, Clone)]
pub struct SessionIssuer {
    verifier: CredentialVerifier,
    codec: TokenCodec,
}

impl SessionIssuer {
    /// Creates an issuer.
    pub fn new(verifier: CredentialVerifier, codec: TokenCodec) -> Self {
        Self { verifier, codec }
    }

    /// Verifies the credentials and mints a token.
    ///
    /// An unknown account and a wrong password fail identically, and both
    /// pay for one password verification, so neither the response nor its
    /// timing reveals which accounts exist. Nothing is persisted.
    pub async fn login(&self, identifier: &str, plaintext: &str) -> AppResult<IssuedSession> {
        let identifier = identifier.trim();
        if identifier.is_empty() || plaintext.is_empty() {
            return Err(AppError::validation(
                "Login identifier and password are required",
            ));
        }

        let user = match self.verifier.resolve_by_login_id(identifier).await {
            Ok(user) => user,
            Err(e) if e.is(ErrorKind::NotFound) => {
                self.verifier.verify_decoy(plaintext);
                warn!(reason = "unknown_account", "Login failed");
                return Err(AppError::authentication(INVALID_CREDENTIALS));
            }
            Err(e) => return Err(e),
        };

        match self.verifier.verify(&user.password_hash, plaintext) {
            Ok(()) => {}
            Err(e) if e.is(ErrorKind::Authentication) => {
                warn!(user_id = %user.id, reason = "password_mismatch", "Login failed");
                return Err(AppError::authentication(INVALID_CREDENTIALS));
            }
            Err(e) => return Err(e),
        }

        let token = self.codec.mint(user.id, user.role)?;

        info!(user_id = %user.id, role = %user.role, "User logged in");
        Ok(IssuedSession { token, user })
    }
}

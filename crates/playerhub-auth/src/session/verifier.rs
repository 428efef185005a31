//! Resolves accounts by login identifier and checks passwords.

use std::sync::Arc;

use tracing::warn;

use playerhub_core::error::AppError;
use playerhub_core::result::AppResult;
use playerhub_database::UserRepository;
use playerhub_entity::user::User;

use crate::password::PasswordHasher;

/// Plaintext behind the decoy hash checked for unknown accounts.
const DECOY_PASSWORD: &str = "playerhub-decoy-credential";

/// Looks users up and checks supplied passwords against stored hashes.
#[derive(Clone)]
pub struct CredentialVerifier {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    decoy_hash: Option<Arc<str>>,
}

impl std::fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialVerifier").finish_non_exhaustive()
    }
}

impl CredentialVerifier {
    /// Creates a verifier. Hashes the decoy credential once up front.
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        let decoy_hash = match hasher.hash(DECOY_PASSWORD) {
            Ok(hash) => Some(Arc::from(hash)),
            Err(e) => {
                warn!(error = %e, "Could not prepare decoy password hash");
                None
            }
        };

        Self {
            users,
            hasher,
            decoy_hash,
        }
    }

    /// Finds the account for a login identifier.
    ///
    /// Identifiers containing `@` are matched against email, anything else
    /// against username. Fails with a not-found error when no account
    /// matches.
    pub async fn resolve_by_login_id(&self, identifier: &str) -> AppResult<User> {
        let found = if identifier.contains('@') {
            self.users.find_by_email(identifier).await?
        } else {
            self.users.find_by_username(identifier).await?
        };
        found.ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Checks `plaintext` against `stored_hash`.
    ///
    /// A mismatch is an authentication error; an unusable stored hash is
    /// an internal error.
    pub fn verify(&self, stored_hash: &str, plaintext: &str) -> AppResult<()> {
        if self.hasher.verify(plaintext, stored_hash)? {
            Ok(())
        } else {
            Err(AppError::authentication("Password mismatch"))
        }
    }

    /// Runs one verification against the decoy hash and discards the result.
    ///
    /// Called when no account matches, so that path costs as much as a
    /// wrong password for a real account.
    pub fn verify_decoy(&self, plaintext: &str) {
        if let Some(hash) = &self.decoy_hash {
            let _ = self.hasher.verify(plaintext, hash);
        }
    }
}

//! Credential verification and login.

pub mod issuer;
pub mod verifier;

pub use issuer::{INVALID_CREDENTIALS, IssuedSession, SessionIssuer};
pub use verifier::CredentialVerifier;

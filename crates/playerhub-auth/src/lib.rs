//! # playerhub-auth
//!
//! The authentication and authorization chain for PlayerHub.
//!
//! ## Modules
//!
//! - `jwt`: token minting and validation, signing key ring, revocation denylist
//! - `password`: Argon2id password hashing
//! - `session`: credential verification and login
//! - `context`: the per-request identity produced by a validated token
//! - `rbac`: role gate for administrative actions
//! - `acl`: ownership gate with pluggable owner resolution

pub mod acl;
pub mod context;
pub mod jwt;
pub mod password;
pub mod rbac;
pub mod session;

pub use acl::{OwnerResolver, OwnershipGate};
pub use context::{AccessDecision, Denial, RequestIdentity};
pub use jwt::{IdentityClaim, KeyRing, TokenCodec, TokenDenylist, TokenError};
pub use password::{Argon2PasswordHasher, PasswordHasher};
pub use rbac::RoleGate;
pub use session::{CredentialVerifier, IssuedSession, SessionIssuer};

//! JWT minting, validation, signing keys and revocation.

pub mod claims;
pub mod codec;
pub mod decoder;
pub mod denylist;
pub mod encoder;
pub mod error;
pub mod keys;

pub use claims::{Claims, IdentityClaim};
pub use codec::TokenCodec;
pub use decoder::JwtDecoder;
pub use denylist::TokenDenylist;
pub use encoder::JwtEncoder;
pub use error::TokenError;
pub use keys::KeyRing;

//! Stateless access token codec.
//!
//! Access tokens are self-contained JWS strings (HS256). Verification
//! needs only the shared secret: no storage, no network. Refresh tokens
//! never pass through here; they are opaque values owned by the
//! session store.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{Claims, TokenType};
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;

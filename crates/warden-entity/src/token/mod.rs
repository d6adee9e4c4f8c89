//! Refresh token entity and persistence port.

pub mod model;
pub mod store;

pub use model::RefreshToken;
pub use store::RefreshTokenRepository;

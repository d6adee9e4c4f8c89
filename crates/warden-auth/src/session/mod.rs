//! Session lifecycle: refresh token issuance, orchestration, and sweep.

pub mod manager;
pub mod store;
pub mod sweeper;

pub use manager::{LoginResult, SessionManager, SessionTokens};
pub use store::RefreshTokenStore;
pub use sweeper::ExpirySweeper;

//! In-memory implementations of the storage ports.
//!
//! Single-node only: state lives behind Tokio mutexes and vanishes on
//! restart. Used by the `"memory"` backend setting and by the test
//! suites.

pub mod audit;
pub mod refresh_token;
pub mod user;

pub use audit::MemoryAuditLogStore;
pub use refresh_token::MemoryRefreshTokenRepository;
pub use user::MemoryCredentialStore;

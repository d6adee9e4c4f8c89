//! PostgreSQL implementations of the storage ports.

pub mod audit;
pub mod refresh_token;
pub mod user;

pub use audit::PostgresAuditLogStore;
pub use refresh_token::PostgresRefreshTokenRepository;
pub use user::PostgresCredentialStore;

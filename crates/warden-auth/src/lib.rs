//! # warden-auth
//!
//! The token lifecycle core of Warden.
//!
//! ## Modules
//!
//! - `jwt` — stateless access token creation and verification
//! - `password` — Argon2id password hashing
//! - `session` — login/refresh/logout orchestration over the refresh
//!   token store, plus the expiry sweeper
//! - `validator` — the inbound guard: bearer header to principal summary
//! - `audit` — fire-and-forget audit event pipeline

pub mod audit;
pub mod jwt;
pub mod password;
pub mod session;
pub mod validator;

pub use audit::ChannelAuditSink;
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenType};
pub use password::PasswordHasher;
pub use session::{ExpirySweeper, RefreshTokenStore, SessionManager};
pub use validator::{TokenValidator, ValidatedUser};

//! # warden-entity
//!
//! Domain entities for Warden: principals, refresh tokens, and audit
//! trail rows, together with the async storage ports the backends
//! implement. The ports live beside the models because they speak
//! entity types, which `warden-core` never references.

pub mod audit;
pub mod token;
pub mod user;

pub use audit::{AuditLog, AuditLogStore, AuditQuery};
pub use token::{RefreshToken, RefreshTokenRepository};
pub use user::{CreateUser, CredentialStore, User, UserRole};

//! Audit trail entity and store port.

pub mod model;
pub mod store;

pub use model::AuditLog;
pub use store::{AuditLogStore, AuditQuery};

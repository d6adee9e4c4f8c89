//! Domain events emitted by Warden operations.
//!
//! Events are handed to the audit sink and persisted as audit trail
//! entries; sibling services submit the same shape through the audit
//! ingestion endpoint.

pub mod audit;

pub use audit::{AuditEvent, actions};

//! Core traits defined in `warden-core` and implemented by other crates.

pub mod audit;

pub use audit::AuditSink;

//! Fire-and-forget audit emission.

use crate::events::AuditEvent;

/// Accepts audit events from the session flows without blocking them.
///
/// `record` is synchronous and must return immediately: implementations
/// queue the event for background persistence and drop it (with a log
/// line) when the queue is full. Auth latency never depends on audit
/// storage.
pub trait AuditSink: Send + Sync {
    /// Queue an event for persistence.
    fn record(&self, event: AuditEvent);
}

/// A sink that discards every event. Used when auditing is disabled.
#[derive(Debug, Clone, Default)]
pub struct NullAuditSink;

impl AuditSink for NullAuditSink {
    fn record(&self, _event: AuditEvent) {}
}

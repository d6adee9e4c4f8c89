//! Channel-backed audit sink with a background writer task.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use warden_core::events::AuditEvent;
use warden_core::traits::AuditSink;
use warden_entity::audit::AuditLogStore;

/// Audit sink that hands events to a background writer over a bounded
/// channel.
///
/// Emission never blocks and never fails the calling flow: when the
/// queue is full the event is dropped with a warning. Losing an audit
/// record is preferable to stalling a login behind a slow database.
#[derive(Clone)]
pub struct ChannelAuditSink {
    /// Sender half of the writer channel.
    tx: mpsc::Sender<AuditEvent>,
}

impl std::fmt::Debug for ChannelAuditSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelAuditSink").finish()
    }
}

impl ChannelAuditSink {
    /// Starts the writer task and returns the sink plus its handle.
    ///
    /// The writer drains until every sender clone is dropped, so
    /// awaiting the handle after shutdown flushes whatever was queued.
    pub fn spawn(store: Arc<dyn AuditLogStore>, capacity: usize) -> (Self, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::channel::<AuditEvent>(capacity);

        let handle = tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                if let Err(e) = store.append(&event).await {
                    tracing::error!("Failed to persist audit event '{}': {}", event.action, e);
                }
            }
            tracing::info!("Audit writer drained");
        });

        (Self { tx }, handle)
    }
}

impl AuditSink for ChannelAuditSink {
    fn record(&self, event: AuditEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(event)) => {
                tracing::warn!("Audit queue full, dropping event '{}'", event.action);
            }
            Err(mpsc::error::TrySendError::Closed(event)) => {
                tracing::warn!("Audit writer gone, dropping event '{}'", event.action);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::mpsc;
    use uuid::Uuid;

    use warden_core::events::{AuditEvent, actions};
    use warden_core::traits::AuditSink;
    use warden_database::memory::MemoryAuditLogStore;
    use warden_entity::audit::{AuditLogStore, AuditQuery};

    use super::ChannelAuditSink;

    #[tokio::test]
    async fn recorded_events_reach_the_store() {
        let store = Arc::new(MemoryAuditLogStore::new());
        let (sink, handle) = ChannelAuditSink::spawn(store.clone(), 16);

        let user_id = Uuid::new_v4();
        sink.record(AuditEvent::login(user_id, "a@example.com"));
        sink.record(AuditEvent::logout(user_id));

        // Dropping the last sender closes the channel; the writer then
        // drains and exits, making the flush deterministic.
        drop(sink);
        handle.await.unwrap();

        let (logs, total) = store.search(&AuditQuery::default()).await.unwrap();
        assert_eq!(total, 2);
        let recorded: Vec<&str> = logs.iter().map(|l| l.action.as_str()).collect();
        assert!(recorded.contains(&actions::LOGIN));
        assert!(recorded.contains(&actions::LOGOUT));
    }

    #[tokio::test]
    async fn full_queue_drops_instead_of_blocking() {
        // No writer task: the channel fills and stays full.
        let (tx, mut rx) = mpsc::channel(1);
        let sink = ChannelAuditSink { tx };

        let user_id = Uuid::new_v4();
        sink.record(AuditEvent::login(user_id, "a@example.com"));
        sink.record(AuditEvent::logout(user_id));
        sink.record(AuditEvent::token_refresh(user_id));

        // Only the first event made it in.
        let queued = rx.try_recv().unwrap();
        assert_eq!(queued.action, actions::LOGIN);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn closed_channel_is_survivable() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let sink = ChannelAuditSink { tx };

        // Must not panic or error.
        sink.record(AuditEvent::login(Uuid::new_v4(), "a@example.com"));
    }
}

//! Payload sources.
//!
//! How a raw payload string actually arrives is host-specific (some hosts
//! expose it through an internal window state, some through IPC). The
//! runtime only needs the [`PayloadSource`] seam: once per polling tick it
//! asks the source whether a new payload is available.

use async_trait::async_trait;
use tokio::sync::mpsc;

/// Supplies raw payloads to the runtime, one per poll at most.
#[async_trait]
pub trait PayloadSource: Send {
    /// Returns the next pending payload, or `None` when nothing new arrived
    /// since the last poll. Must not block the tick for long; slow hosts
    /// should buffer internally.
    async fn poll(&mut self) -> Option<String>;
}

/// An in-process queue-backed source.
///
/// Useful for demos, tests, and hosts that push payloads from another task.
pub struct QueuedSource {
    rx: mpsc::UnboundedReceiver<String>,
}

/// Push handle paired with a [`QueuedSource`].
#[derive(Clone)]
pub struct PayloadQueue {
    tx: mpsc::UnboundedSender<String>,
}

impl QueuedSource {
    /// Creates a queue-backed source and its push handle.
    pub fn new() -> (Self, PayloadQueue) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { rx }, PayloadQueue { tx })
    }
}

#[async_trait]
impl PayloadSource for QueuedSource {
    async fn poll(&mut self) -> Option<String> {
        self.rx.try_recv().ok()
    }
}

impl PayloadQueue {
    /// Enqueues one raw payload. Returns false if the source was dropped.
    pub fn push(&self, raw: impl Into<String>) -> bool {
        self.tx.send(raw.into()).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_queue_delivers_in_order() {
        let (mut source, queue) = QueuedSource::new();
        queue.push("first/");
        queue.push("second/");

        assert_eq!(source.poll().await.as_deref(), Some("first/"));
        assert_eq!(source.poll().await.as_deref(), Some("second/"));
        assert_eq!(source.poll().await, None);
    }

    #[tokio::test]
    async fn test_poll_on_empty_queue_is_none() {
        let (mut source, _queue) = QueuedSource::new();
        assert_eq!(source.poll().await, None);
    }

    #[tokio::test]
    async fn test_push_after_source_dropped_fails() {
        let (source, queue) = QueuedSource::new();
        drop(source);
        assert!(!queue.push("late/"));
    }
}

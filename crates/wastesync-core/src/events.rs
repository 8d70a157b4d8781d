//! Sync event system for connectivity and cache notifications.
//!
//! The coordinator reports what it does through [`SyncEvent`]s so a front
//! end can show a "showing cached data" notice or a pending-sync badge
//! without polling.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use wastesync_types::ResourceKind;

/// Events emitted by the sync coordinator.
///
/// All events are serializable for logging and IPC.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new event types
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum SyncEvent {
    /// The connectivity state flipped.
    ConnectivityChanged { online: bool },
    /// A read was served from the local cache instead of the remote API.
    Degraded { kind: ResourceKind, reason: String },
    /// A record was created locally and has not reached the remote API.
    PendingSyncRaised { kind: ResourceKind, id: i64 },
    /// A successful online load cleared the pending-sync flag.
    PendingSyncCleared,
    /// Populating the cache failed; the surrounding operation still succeeded.
    CacheWriteFailed { kind: ResourceKind, error: String },
}

/// Sender for sync events.
pub type EventSender = broadcast::Sender<SyncEvent>;

/// Receiver for sync events.
pub type EventReceiver = broadcast::Receiver<SyncEvent>;

/// Event dispatcher for sending events to multiple receivers.
#[derive(Debug, Clone)]
pub struct EventDispatcher {
    sender: EventSender,
}

impl EventDispatcher {
    /// Create a new event dispatcher.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events.
    pub fn subscribe(&self) -> EventReceiver {
        self.sender.subscribe()
    }

    /// Send an event.
    pub fn send(&self, event: SyncEvent) {
        // Ignore error if no receivers
        let _ = self.sender.send(event);
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new(100)
    }
}

//! Network reachability signal.
//!
//! [`ConnectivityMonitor`] holds a single `online` boolean that every other
//! component reads. Transitions are pushed in by whatever observes the
//! platform (or by tests), and subscribers are notified as soon as the value
//! changes. There is no debouncing.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

/// Shared handle to the current connectivity state.
///
/// Cloning is cheap; all clones observe and drive the same state.
///
/// # Example
///
/// ```
/// use wastesync_core::ConnectivityMonitor;
///
/// // The platform could not tell us: assume online.
/// let monitor = ConnectivityMonitor::new(None);
/// assert!(monitor.is_online());
///
/// monitor.set_online(false);
/// assert!(!monitor.is_online());
/// ```
#[derive(Debug, Clone)]
pub struct ConnectivityMonitor {
    sender: Arc<watch::Sender<bool>>,
}

impl ConnectivityMonitor {
    /// Create a monitor from the platform's reachability signal.
    ///
    /// `None` means the platform offers no signal; the monitor then starts
    /// online so nothing is blocked behind a missing feature.
    pub fn new(platform_signal: Option<bool>) -> Self {
        let (sender, _) = watch::channel(platform_signal.unwrap_or(true));
        Self {
            sender: Arc::new(sender),
        }
    }

    /// A monitor that starts online.
    pub fn online() -> Self {
        Self::new(Some(true))
    }

    /// A monitor that starts offline.
    pub fn offline() -> Self {
        Self::new(Some(false))
    }

    /// Current state.
    pub fn is_online(&self) -> bool {
        *self.sender.borrow()
    }

    /// Record a transition. Returns `true` if the state changed.
    ///
    /// Setting the current value again does not notify subscribers.
    pub fn set_online(&self, online: bool) -> bool {
        let changed = self.sender.send_if_modified(|current| {
            if *current == online {
                false
            } else {
                *current = online;
                true
            }
        });

        if changed {
            info!(
                "Connectivity changed: {}",
                if online { "online" } else { "offline" }
            );
        }
        changed
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.sender.subscribe()
    }

    /// Wait until the state equals `online`. Returns immediately if it already does.
    pub async fn wait_for(&self, online: bool) {
        let mut rx = self.subscribe();
        // The sender lives as long as `self`, so this cannot observe a closed channel.
        let _ = rx.wait_for(|current| *current == online).await;
    }
}

impl Default for ConnectivityMonitor {
    fn default() -> Self {
        Self::new(None)
    }
}

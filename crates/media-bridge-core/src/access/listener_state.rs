use std::sync::{
    Arc, OnceLock,
    atomic::{AtomicBool, Ordering},
};

use tracing::{debug, info};

static GLOBAL: OnceLock<Arc<ListenerState>> = OnceLock::new();

/// Connection state of the notification listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerConnection {
    /// Initial state; also entered on disconnect and teardown.
    Disconnected,
    /// The host reported the listener as connected.
    Connected,
}

/// Cached flag tracking whether the listener service is connected.
///
/// Written by host lifecycle callbacks, read by the access gate for
/// diagnostics. A single atomic cell with no lock.
#[derive(Debug, Default)]
pub struct ListenerState {
    connected: AtomicBool,
}

impl ListenerState {
    /// New state, disconnected.
    pub const fn new() -> Self {
        Self {
            connected: AtomicBool::new(false),
        }
    }

    /// Process-wide instance.
    pub fn global() -> Arc<ListenerState> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(ListenerState::new())))
    }

    /// Host reported the listener connected.
    pub fn on_listener_connected(&self) {
        self.connected.store(true, Ordering::Release);
        info!("Notification listener connected");
    }

    /// Host reported the listener disconnected.
    pub fn on_listener_disconnected(&self) {
        self.connected.store(false, Ordering::Release);
        info!("Notification listener disconnected");
    }

    /// Listener torn down.
    pub fn on_destroy(&self) {
        self.connected.store(false, Ordering::Release);
        debug!("Notification listener destroyed");
    }

    /// Whether the listener is currently connected.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    /// Current state as an enum.
    pub fn connection(&self) -> ListenerConnection {
        if self.is_connected() {
            ListenerConnection::Connected
        } else {
            ListenerConnection::Disconnected
        }
    }
}

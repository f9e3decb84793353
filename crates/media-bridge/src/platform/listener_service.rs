use crate::platform::host_reachable;

use media_bridge_core::ListenerState;

use std::sync::Arc;

use tracing::warn;

/// Lifetime of the notification listener inside this process.
///
/// Connects the shared [`ListenerState`] on start when the host session
/// service answers, and reports teardown when dropped.
pub struct ListenerService {
    state: Arc<ListenerState>,
}

impl ListenerService {
    /// Start the listener against `state`.
    pub fn start(state: Arc<ListenerState>) -> Self {
        if host_reachable() {
            state.on_listener_connected();
        } else {
            warn!("Media session service unreachable, listener stays disconnected");
        }

        Self { state }
    }
}

impl Drop for ListenerService {
    fn drop(&mut self) {
        self.state.on_destroy();
    }
}

use media_bridge_core::{
    CoreResult, ListenerComponent, MediaSession, PlaybackState, SessionRegistry, VolumeAdjustment,
};

use tracing::debug;

/// Registry for builds without a session backend. Never has sessions.
pub struct NoSessionRegistry;

impl NoSessionRegistry {
    /// The registry.
    pub fn new(_volume_step: f64) -> Self {
        Self
    }
}

/// Uninhabited session type for [`NoSessionRegistry`].
pub enum NoSession {}

impl SessionRegistry for NoSessionRegistry {
    type Session = NoSession;

    fn active_sessions(&self, component: &ListenerComponent) -> CoreResult<Vec<NoSession>> {
        debug!(%component, "Media session discovery not supported in this build");
        Ok(Vec::new())
    }
}

impl MediaSession for NoSession {
    fn id(&self) -> &str {
        match *self {}
    }

    fn playback_state(&self) -> Option<PlaybackState> {
        match *self {}
    }

    fn play(&self) -> CoreResult<()> {
        match *self {}
    }

    fn pause(&self) -> CoreResult<()> {
        match *self {}
    }

    fn skip_to_next(&self) -> CoreResult<()> {
        match *self {}
    }

    fn skip_to_previous(&self) -> CoreResult<()> {
        match *self {}
    }

    fn adjust_volume(&self, _adjustment: VolumeAdjustment) -> CoreResult<()> {
        match *self {}
    }
}

/// Without a session backend there is nothing to connect to, so the
/// listener is considered connected as soon as it starts.
pub(crate) fn host_reachable() -> bool {
    true
}

//! Seams to the host operating system.
//!
//! The core never talks to the OS directly. A host provides the live
//! listener-permission setting, the media session registry and a system-wide
//! volume control; the dispatcher drives them through these traits.

mod listener_component;

pub use listener_component::ListenerComponent;

use crate::{CoreResult, PlaybackState, VolumeAdjustment};

/// Live view of the OS listener-permission setting.
pub trait AccessSettings {
    /// Raw value of the enabled-listeners setting: flattened component names
    /// separated by `:`. `None` when the setting is absent.
    fn enabled_listeners(&self) -> CoreResult<Option<String>>;

    /// Open the screen (or file) where the user grants listener access.
    fn open_listener_settings(&self) -> CoreResult<()>;
}

/// A controllable media session exposed by the host.
///
/// Handles are transient: the dispatcher fetches them per command and drops
/// them before returning.
pub trait MediaSession {
    /// Host identifier of the session, used in logs.
    fn id(&self) -> &str;

    /// Current playback state, `None` when the session reports none.
    fn playback_state(&self) -> Option<PlaybackState>;

    /// Start or resume playback.
    fn play(&self) -> CoreResult<()>;

    /// Pause playback.
    fn pause(&self) -> CoreResult<()>;

    /// Skip to the next item.
    fn skip_to_next(&self) -> CoreResult<()>;

    /// Skip to the previous item.
    fn skip_to_previous(&self) -> CoreResult<()>;

    /// Whether the session exposes its own volume control.
    fn has_volume_control(&self) -> bool {
        true
    }

    /// Move the session volume one step.
    fn adjust_volume(&self, adjustment: VolumeAdjustment) -> CoreResult<()>;
}

/// Registry of media sessions visible to a listener component.
pub trait SessionRegistry {
    /// Concrete session handle.
    type Session: MediaSession;

    /// Sessions currently active for `component`, in host priority order.
    fn active_sessions(&self, component: &ListenerComponent) -> CoreResult<Vec<Self::Session>>;
}

/// System-wide volume control used when no session volume is available.
pub trait SystemVolume {
    /// Move the system volume one step.
    fn adjust_volume(&self, adjustment: VolumeAdjustment) -> CoreResult<()>;
}

//! Desktop implementation of the host seams.
//!
//! - Access settings: a `:`-separated listener list in the config directory.
//! - Sessions: MPRIS over D-Bus with the default `mpris` feature on Linux,
//!   none otherwise.
//! - System volume: `wpctl` on Linux, `osascript` on macOS, volume keys on Windows.
//! - Volume indicator: a desktop notification when volume UI is enabled.

mod file_access_settings;
mod listener_service;
#[cfg(all(target_os = "linux", feature = "mpris"))]
mod mpris_registry;
#[cfg(not(all(target_os = "linux", feature = "mpris")))]
mod no_session_registry;
mod system_mixer;
mod volume_indicator;

pub(crate) use {
    file_access_settings::FileAccessSettings, listener_service::ListenerService,
    system_mixer::SystemMixer,
};

#[cfg(test)]
pub(crate) use volume_indicator::indicator_body;

#[cfg(all(test, unix, not(target_os = "macos")))]
pub(crate) use system_mixer::parse_wpctl_volume;

#[cfg(all(test, target_os = "macos"))]
pub(crate) use system_mixer::parse_osascript_volume;

#[cfg(all(target_os = "linux", feature = "mpris"))]
pub(crate) use mpris_registry::{MprisRegistry as DesktopRegistry, host_reachable};

#[cfg(all(test, target_os = "linux", feature = "mpris"))]
pub(crate) use mpris_registry::playback_state_from;

#[cfg(not(all(target_os = "linux", feature = "mpris")))]
pub(crate) use no_session_registry::{NoSessionRegistry as DesktopRegistry, host_reachable};

//! Media Bridge Core Library
//!
//! Command dispatch and access gating for controlling the host's active
//! media session. The host OS is reached only through the traits in
//! [`AccessSettings`], [`SessionRegistry`], [`MediaSession`] and
//! [`SystemVolume`].
//!
//! # Example
//!
//! ```no_run
//! use media_bridge_core::{
//!     AccessSettings, CommandDispatcher, CoreResult, ListenerComponent, ListenerState,
//!     MediaSession, PlaybackState, SessionAccessGate, SessionRegistry, SystemVolume,
//!     VolumeAdjustment,
//! };
//!
//! struct Settings;
//! impl AccessSettings for Settings {
//!     fn enabled_listeners(&self) -> CoreResult<Option<String>> {
//!         Ok(Some("com.example/com.example.Listener".to_string()))
//!     }
//!     fn open_listener_settings(&self) -> CoreResult<()> {
//!         Ok(())
//!     }
//! }
//!
//! struct Nothing;
//! impl SessionRegistry for Nothing {
//!     type Session = Idle;
//!     fn active_sessions(&self, _: &ListenerComponent) -> CoreResult<Vec<Idle>> {
//!         Ok(vec![])
//!     }
//! }
//! impl SystemVolume for Nothing {
//!     fn adjust_volume(&self, _: VolumeAdjustment) -> CoreResult<()> {
//!         Ok(())
//!     }
//! }
//!
//! struct Idle;
//! impl MediaSession for Idle {
//!     fn id(&self) -> &str { "idle" }
//!     fn playback_state(&self) -> Option<PlaybackState> { None }
//!     fn play(&self) -> CoreResult<()> { Ok(()) }
//!     fn pause(&self) -> CoreResult<()> { Ok(()) }
//!     fn skip_to_next(&self) -> CoreResult<()> { Ok(()) }
//!     fn skip_to_previous(&self) -> CoreResult<()> { Ok(()) }
//!     fn adjust_volume(&self, _: VolumeAdjustment) -> CoreResult<()> { Ok(()) }
//! }
//!
//! let component = ListenerComponent::new("com.example", "com.example.Listener");
//! let gate = SessionAccessGate::new(Settings, component, ListenerState::global());
//! let dispatcher = CommandDispatcher::new(gate, Nothing, Nothing);
//!
//! println!("{:?}", dispatcher.handle("volumeUp"));
//! ```

mod access;
mod command;
mod dispatcher;
mod error;
mod host;

pub use {
    access::{ListenerConnection, ListenerState, SessionAccessGate},
    command::{Command, MethodResult, PlaybackState, VolumeAdjustment, VolumeDirection},
    dispatcher::CommandDispatcher,
    error::{
        ErrorKind, MediaError, NO_ACTIVE_SESSION_MESSAGE, PERMISSION_DENIED_MESSAGE,
        Result as CoreResult,
    },
    host::{AccessSettings, ListenerComponent, MediaSession, SessionRegistry, SystemVolume},
};

#[cfg(test)]
mod tests;

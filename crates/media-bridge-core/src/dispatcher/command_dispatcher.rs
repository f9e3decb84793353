use crate::{
    AccessSettings, Command, CoreResult, MediaError, MediaSession, MethodResult,
    SessionAccessGate, SessionRegistry, SystemVolume, VolumeAdjustment, VolumeDirection,
};

use std::{
    any::Any,
    panic::{AssertUnwindSafe, Location, catch_unwind},
};

use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument, warn};

/// Maps command names to host actions.
///
/// Every call runs to completion on the calling thread. Sessions are looked
/// up fresh for each command and never cached.
///
/// # Failure model
///
/// Nothing escapes [`handle`](Self::handle): unknown names become
/// [`MethodResult::NotImplemented`], typed errors become
/// [`MethodResult::Error`], and a panic inside a host implementation is
/// reported as a transport failure.
pub struct CommandDispatcher<A, R, V> {
    gate: SessionAccessGate<A>,
    registry: R,
    system_volume: V,
    show_volume_ui: bool,
}

impl<A, R, V> CommandDispatcher<A, R, V>
where
    A: AccessSettings,
    R: SessionRegistry,
    V: SystemVolume,
{
    /// Dispatcher over the given host seams. Volume changes show the host UI
    /// by default.
    pub fn new(gate: SessionAccessGate<A>, registry: R, system_volume: V) -> Self {
        Self {
            gate,
            registry,
            system_volume,
            show_volume_ui: true,
        }
    }

    /// Set whether volume changes ask the host to show its indicator.
    pub fn with_volume_ui(mut self, show_ui: bool) -> Self {
        self.show_volume_ui = show_ui;
        self
    }

    /// The access gate consulted before session commands.
    pub fn gate(&self) -> &SessionAccessGate<A> {
        &self.gate
    }

    /// Handle one method call by name.
    #[instrument(skip(self))]
    pub fn handle(&self, method: &str) -> MethodResult {
        let Some(command) = Command::from_method(method) else {
            warn!("Unknown method");
            return MethodResult::NotImplemented;
        };

        match catch_unwind(AssertUnwindSafe(|| self.execute(command))) {
            Ok(Ok(value)) => {
                debug!(%command, value, "Command succeeded");
                MethodResult::success(value)
            }
            Ok(Err(e)) => {
                warn!(%command, error = ?e, "Command failed");
                MethodResult::failure(command, &e)
            }
            Err(payload) => {
                let e = MediaError::TransportFailure {
                    reason: panic_message(payload.as_ref()),
                    location: ErrorLocation::from(Location::caller()),
                };
                error!(%command, error = ?e, "Command panicked");
                MethodResult::failure(command, &e)
            }
        }
    }

    /// Run a parsed command and return its boolean answer.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::PermissionDenied`] or
    /// [`MediaError::NoActiveSession`] when a session command cannot reach a
    /// session, or whatever the host reports when an action fails.
    #[instrument(skip(self))]
    pub fn execute(&self, command: Command) -> CoreResult<bool> {
        match command {
            Command::Initialize | Command::HasPermission => Ok(self.gate.has_permission()),
            Command::RequestPermission => {
                if let Err(e) = self.gate.request_permission() {
                    warn!(error = ?e, "Failed to open notification access settings");
                }
                Ok(true)
            }
            Command::PlayPause => self.play_pause().map(|()| true),
            Command::NextTrack => {
                let session = self.require_session()?;
                session.skip_to_next()?;
                info!(session = session.id(), "Skipped to next track");
                Ok(true)
            }
            Command::PreviousTrack => {
                let session = self.require_session()?;
                session.skip_to_previous()?;
                info!(session = session.id(), "Skipped to previous track");
                Ok(true)
            }
            Command::VolumeUp => self.adjust_volume(VolumeDirection::Raise).map(|()| true),
            Command::VolumeDown => self.adjust_volume(VolumeDirection::Lower).map(|()| true),
        }
    }

    fn play_pause(&self) -> CoreResult<()> {
        let session = self.require_session()?;
        let state = session.playback_state();

        if state.is_some_and(|s| s.is_playing()) {
            session.pause()?;
            info!(session = session.id(), ?state, "Paused playback");
        } else {
            session.play()?;
            info!(session = session.id(), ?state, "Started playback");
        }

        Ok(())
    }

    /// Session volume first; the system mixer when there is no session or the
    /// session has no volume control. Permission errors are never swallowed.
    fn adjust_volume(&self, direction: VolumeDirection) -> CoreResult<()> {
        let adjustment = VolumeAdjustment {
            direction,
            show_ui: self.show_volume_ui,
        };

        match self.require_session() {
            Ok(session) if session.has_volume_control() => {
                session.adjust_volume(adjustment)?;
                info!(session = session.id(), ?direction, "Adjusted session volume");
                Ok(())
            }
            Ok(session) => {
                debug!(
                    session = session.id(),
                    "Session has no volume control, using system volume"
                );
                self.adjust_system_volume(adjustment)
            }
            Err(MediaError::NoActiveSession { .. }) => {
                debug!("No active session, using system volume");
                self.adjust_system_volume(adjustment)
            }
            Err(e) => Err(e),
        }
    }

    fn adjust_system_volume(&self, adjustment: VolumeAdjustment) -> CoreResult<()> {
        self.system_volume.adjust_volume(adjustment)?;
        info!(direction = ?adjustment.direction, "Adjusted system volume");
        Ok(())
    }

    /// First active session that reports a playback state, if any.
    #[track_caller]
    fn active_session(&self) -> CoreResult<Option<R::Session>> {
        self.gate.require_permission()?;

        let sessions = self.registry.active_sessions(self.gate.component())?;
        debug!(count = sessions.len(), "Listed active sessions");

        Ok(sessions
            .into_iter()
            .find(|session| session.playback_state().is_some()))
    }

    #[track_caller]
    fn require_session(&self) -> CoreResult<R::Session> {
        self.active_session()?
            .ok_or_else(|| MediaError::NoActiveSession {
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "host panicked while handling the command".to_string()
    }
}

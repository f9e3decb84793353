use media_bridge_core::{
    CoreResult, ListenerComponent, MediaError, MediaSession, PlaybackState, SessionRegistry,
    VolumeAdjustment, VolumeDirection,
};

use std::panic::Location;

use error_location::ErrorLocation;
use mpris::{PlaybackStatus, Player, PlayerFinder};
use tracing::{debug, instrument};

use crate::platform::volume_indicator::show_volume_indicator;

#[track_caller]
fn dbus_failure(action: &str, e: impl std::fmt::Display) -> MediaError {
    MediaError::TransportFailure {
        reason: format!("{}: {}", action, e),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Session state for an MPRIS playback status.
pub(crate) fn playback_state_from(status: PlaybackStatus) -> PlaybackState {
    match status {
        PlaybackStatus::Playing => PlaybackState::Playing,
        PlaybackStatus::Paused => PlaybackState::Paused,
        PlaybackStatus::Stopped => PlaybackState::Stopped,
    }
}

/// Sessions discovered over MPRIS on the D-Bus session bus.
///
/// A new bus connection is opened for every lookup; nothing is cached
/// between commands.
pub struct MprisRegistry {
    volume_step: f64,
}

impl MprisRegistry {
    /// Registry whose sessions move volume by `volume_step` (0.0 to 1.0).
    pub fn new(volume_step: f64) -> Self {
        Self { volume_step }
    }
}

impl SessionRegistry for MprisRegistry {
    type Session = MprisSession;

    /// Players currently on the bus, playing ones first.
    ///
    /// MPRIS exposes every player to every client, so `component` does not
    /// narrow the result.
    #[instrument(skip(self, component), fields(component = %component))]
    fn active_sessions(&self, component: &ListenerComponent) -> CoreResult<Vec<MprisSession>> {
        let finder = PlayerFinder::new().map_err(|e| dbus_failure("Failed to connect to D-Bus", e))?;

        let players = finder
            .find_all()
            .map_err(|e| dbus_failure("Failed to list media players", e))?;

        let mut sessions: Vec<MprisSession> = players
            .into_iter()
            .map(|player| MprisSession::new(player, self.volume_step))
            .collect();

        // Stable: bus order is kept within each group.
        sessions.sort_by_key(|session| session.state != Some(PlaybackState::Playing));

        debug!(count = sessions.len(), "Found MPRIS players");

        Ok(sessions)
    }
}

/// One MPRIS player.
pub struct MprisSession {
    id: String,
    state: Option<PlaybackState>,
    player: Player,
    volume_step: f64,
}

impl MprisSession {
    fn new(player: Player, volume_step: f64) -> Self {
        let state = match player.get_playback_status() {
            Ok(status) => Some(playback_state_from(status)),
            Err(e) => {
                debug!(player = player.bus_name(), error = %e, "Player reports no status");
                None
            }
        };

        Self {
            id: player.bus_name().to_string(),
            state,
            player,
            volume_step,
        }
    }
}

impl MediaSession for MprisSession {
    fn id(&self) -> &str {
        &self.id
    }

    fn playback_state(&self) -> Option<PlaybackState> {
        self.state
    }

    fn play(&self) -> CoreResult<()> {
        self.player.play().map_err(|e| dbus_failure("Play failed", e))
    }

    fn pause(&self) -> CoreResult<()> {
        self.player.pause().map_err(|e| dbus_failure("Pause failed", e))
    }

    fn skip_to_next(&self) -> CoreResult<()> {
        self.player.next().map_err(|e| dbus_failure("Next failed", e))
    }

    fn skip_to_previous(&self) -> CoreResult<()> {
        self.player
            .previous()
            .map_err(|e| dbus_failure("Previous failed", e))
    }

    fn has_volume_control(&self) -> bool {
        self.player.can_control().unwrap_or(false) && self.player.get_volume().is_ok()
    }

    fn adjust_volume(&self, adjustment: VolumeAdjustment) -> CoreResult<()> {
        let current = self
            .player
            .get_volume()
            .map_err(|e| dbus_failure("Failed to read volume", e))?;

        let delta = match adjustment.direction {
            VolumeDirection::Raise => self.volume_step,
            VolumeDirection::Lower => -self.volume_step,
        };
        let target = (current + delta).clamp(0.0, 1.0);

        self.player
            .set_volume(target)
            .map_err(|e| dbus_failure("Failed to set volume", e))?;

        debug!(player = %self.id, current, target, "Session volume set");

        if adjustment.show_ui {
            show_volume_indicator(adjustment.direction, Some(target));
        }

        Ok(())
    }
}

/// Whether the D-Bus session bus accepts a connection.
pub(crate) fn host_reachable() -> bool {
    match PlayerFinder::new() {
        Ok(_) => true,
        Err(e) => {
            debug!(error = %e, "D-Bus session bus unavailable");
            false
        }
    }
}

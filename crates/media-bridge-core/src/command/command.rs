use std::fmt;

use serde::Serialize;

/// A single user intent received over the command channel.
///
/// Commands carry no arguments. Each one has a fixed wire name (the method
/// name the caller sends) and a fixed error code used when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    /// Report whether listener access is granted.
    Initialize,
    /// Report whether listener access is granted.
    HasPermission,
    /// Open the OS screen where listener access is granted.
    RequestPermission,
    /// Toggle the active session between playing and paused.
    PlayPause,
    /// Skip the active session forward.
    NextTrack,
    /// Skip the active session back.
    PreviousTrack,
    /// Raise session volume, or system volume when no session volume exists.
    VolumeUp,
    /// Lower session volume, or system volume when no session volume exists.
    VolumeDown,
}

impl Command {
    /// Every command, in wire order.
    pub const ALL: [Command; 8] = [
        Command::Initialize,
        Command::HasPermission,
        Command::RequestPermission,
        Command::PlayPause,
        Command::NextTrack,
        Command::PreviousTrack,
        Command::VolumeUp,
        Command::VolumeDown,
    ];

    /// Parse a wire method name. Matching is exact and case-sensitive.
    pub fn from_method(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|command| command.method_name() == name)
    }

    /// The wire method name.
    pub fn method_name(self) -> &'static str {
        match self {
            Command::Initialize => "initialize",
            Command::HasPermission => "hasPermission",
            Command::RequestPermission => "requestPermission",
            Command::PlayPause => "playPause",
            Command::NextTrack => "nextTrack",
            Command::PreviousTrack => "previousTrack",
            Command::VolumeUp => "volumeUp",
            Command::VolumeDown => "volumeDown",
        }
    }

    /// Error code reported when this command fails.
    pub fn error_code(self) -> &'static str {
        match self {
            Command::Initialize => "INITIALIZE_ERROR",
            Command::HasPermission => "HAS_PERMISSION_ERROR",
            Command::RequestPermission => "REQUEST_PERMISSION_ERROR",
            Command::PlayPause => "PLAY_PAUSE_ERROR",
            Command::NextTrack => "NEXT_TRACK_ERROR",
            Command::PreviousTrack => "PREVIOUS_TRACK_ERROR",
            Command::VolumeUp => "VOLUME_UP_ERROR",
            Command::VolumeDown => "VOLUME_DOWN_ERROR",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

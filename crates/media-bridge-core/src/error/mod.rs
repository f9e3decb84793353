use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// Message returned to callers when listener access has not been granted.
pub const PERMISSION_DENIED_MESSAGE: &str =
    "Notification access required. Enable it in Settings > Notifications > Notification Access.";

/// Message returned to callers when no controllable session exists.
pub const NO_ACTIVE_SESSION_MESSAGE: &str =
    "No active media session detected. Start playback in your media app and try again.";

/// Media control errors with source location tracking.
#[derive(Error, Debug)]
pub enum MediaError {
    /// The process has not been granted notification listener access.
    #[error(
        "Notification access required. Enable it in Settings > Notifications > Notification Access. {location}"
    )]
    PermissionDenied {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Permission is granted but no session reports a playback state.
    #[error(
        "No active media session detected. Start playback in your media app and try again. {location}"
    )]
    NoActiveSession {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The host rejected or failed a transport or volume action.
    #[error("Transport failure: {reason} {location}")]
    TransportFailure {
        /// Description of the failure reported by the host.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The listener permission setting could not be read or opened.
    #[error("Listener settings unavailable: {reason} {location}")]
    SettingsUnavailable {
        /// Description of the settings failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Coarse error category reported alongside every failed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Listener access missing.
    PermissionDenied,
    /// No session to act on.
    NoActiveSession,
    /// Anything else that went wrong while talking to the host.
    TransportFailure,
}

impl MediaError {
    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MediaError::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            MediaError::NoActiveSession { .. } => ErrorKind::NoActiveSession,
            MediaError::TransportFailure { .. } | MediaError::SettingsUnavailable { .. } => {
                ErrorKind::TransportFailure
            }
        }
    }

    /// Human-readable message without the source location suffix.
    pub fn message(&self) -> String {
        match self {
            MediaError::PermissionDenied { .. } => PERMISSION_DENIED_MESSAGE.to_string(),
            MediaError::NoActiveSession { .. } => NO_ACTIVE_SESSION_MESSAGE.to_string(),
            MediaError::TransportFailure { reason, .. }
            | MediaError::SettingsUnavailable { reason, .. } => reason.clone(),
        }
    }
}

/// Result type alias using [`MediaError`].
pub type Result<T> = std::result::Result<T, MediaError>;

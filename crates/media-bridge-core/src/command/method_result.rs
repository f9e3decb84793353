use crate::{Command, ErrorKind, MediaError};

use serde::Serialize;

/// Outcome of one command, as returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResult {
    /// The command ran. `value` is the boolean answer (always `true` for actions).
    Success {
        /// Command return value.
        value: bool,
    },
    /// The command failed with a typed, recoverable error.
    Error {
        /// Per-command error code, e.g. `PLAY_PAUSE_ERROR`.
        code: String,
        /// Error category.
        kind: ErrorKind,
        /// Human-readable description.
        message: String,
    },
    /// The method name is not a known command.
    NotImplemented,
}

impl MethodResult {
    /// Successful result carrying `value`.
    pub fn success(value: bool) -> Self {
        MethodResult::Success { value }
    }

    /// Failed result for `command` described by `error`.
    pub fn failure(command: Command, error: &MediaError) -> Self {
        MethodResult::Error {
            code: command.error_code().to_string(),
            kind: error.kind(),
            message: error.message(),
        }
    }

    /// True for [`MethodResult::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, MethodResult::Success { .. })
    }

    /// Error category, if this is a failure.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            MethodResult::Error { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

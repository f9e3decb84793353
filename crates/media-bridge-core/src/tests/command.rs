use crate::{Command, ErrorKind, MediaError, MethodResult, PlaybackState};

use std::panic::Location;

use error_location::ErrorLocation;

/// WHAT: Every command parses back from its own wire name
/// WHY: The caller only ever sends method names
#[test]
fn given_wire_names_when_parsing_then_each_maps_to_its_command() {
    // Given: All known commands
    for command in Command::ALL {
        // When: Parsing the wire name
        let parsed = Command::from_method(command.method_name());

        // Then: The same command comes back
        assert_eq!(parsed, Some(command));
    }
}

/// WHAT: Method names are matched exactly
/// WHY: Unknown or mis-cased names must fall through to not-implemented
#[test]
fn given_unknown_or_miscased_name_when_parsing_then_none() {
    // Given/When/Then: Near-miss names do not parse
    assert_eq!(Command::from_method("PlayPause"), None);
    assert_eq!(Command::from_method("play_pause"), None);
    assert_eq!(Command::from_method(" playPause"), None);
    assert_eq!(Command::from_method("seekTo"), None);
    assert_eq!(Command::from_method(""), None);
}

/// WHAT: Buffering is treated like playing for the toggle
/// WHY: Pressing play/pause while a stream buffers should stop it
#[test]
fn given_playback_states_when_checking_is_playing_then_only_playing_and_buffering() {
    // Given/When/Then
    assert!(PlaybackState::Playing.is_playing());
    assert!(PlaybackState::Buffering.is_playing());
    assert!(!PlaybackState::Paused.is_playing());
    assert!(!PlaybackState::Stopped.is_playing());
    assert!(!PlaybackState::None.is_playing());
    assert!(!PlaybackState::Error.is_playing());
    assert!(!PlaybackState::SkippingToNext.is_playing());
}

/// WHAT: Failure results carry the per-command code, typed kind and plain message
/// WHY: Callers branch on code/kind and show the message to the user
#[test]
fn given_no_session_error_when_building_failure_then_code_kind_and_message_set() {
    // Given: A no-active-session error
    let error = MediaError::NoActiveSession {
        location: ErrorLocation::from(Location::caller()),
    };

    // When: Building the result for nextTrack
    let result = MethodResult::failure(Command::NextTrack, &error);

    // Then: Fields reflect the command and error, without the location suffix
    assert_eq!(
        result,
        MethodResult::Error {
            code: "NEXT_TRACK_ERROR".to_string(),
            kind: ErrorKind::NoActiveSession,
            message: crate::NO_ACTIVE_SESSION_MESSAGE.to_string(),
        }
    );
    assert!(!result.is_success());
}

/// WHAT: Results serialize with a status tag
/// WHY: The binary writes them as JSON lines for the caller
#[test]
fn given_results_when_serializing_then_status_tagged_json() {
    // Given: One result of each shape
    let success = MethodResult::success(true);
    let failure = MethodResult::Error {
        code: "PLAY_PAUSE_ERROR".to_string(),
        kind: ErrorKind::PermissionDenied,
        message: "denied".to_string(),
    };

    // When: Serializing
    let success = serde_json::to_value(&success).unwrap();
    let failure = serde_json::to_value(&failure).unwrap();
    let missing = serde_json::to_value(MethodResult::NotImplemented).unwrap();

    // Then: Tagged by status, kinds in snake_case
    assert_eq!(success, serde_json::json!({"status": "success", "value": true}));
    assert_eq!(
        failure,
        serde_json::json!({
            "status": "error",
            "code": "PLAY_PAUSE_ERROR",
            "kind": "permission_denied",
            "message": "denied",
        })
    );
    assert_eq!(missing, serde_json::json!({"status": "not_implemented"}));
}

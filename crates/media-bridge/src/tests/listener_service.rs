use crate::platform::ListenerService;

use std::sync::Arc;

use media_bridge_core::{ListenerConnection, ListenerState};

/// WHAT: Starting the service connects the listener; dropping it tears down
/// WHY: The cached flag mirrors the listener lifetime
#[test]
#[cfg(not(all(target_os = "linux", feature = "mpris")))]
fn given_listener_service_when_started_and_dropped_then_state_follows() {
    // Given
    let state = Arc::new(ListenerState::new());

    // When: Started
    let service = ListenerService::start(Arc::clone(&state));

    // Then: Connected
    assert_eq!(state.connection(), ListenerConnection::Connected);

    // When: Dropped
    drop(service);

    // Then: Disconnected
    assert_eq!(state.connection(), ListenerConnection::Disconnected);
}

/// WHAT: Teardown always ends disconnected
/// WHY: A stale connected flag would mislead diagnostics after shutdown
#[test]
fn given_any_host_when_service_dropped_then_disconnected() {
    // Given
    let state = Arc::new(ListenerState::new());
    let service = ListenerService::start(Arc::clone(&state));

    // When
    drop(service);

    // Then
    assert!(!state.is_connected());
}

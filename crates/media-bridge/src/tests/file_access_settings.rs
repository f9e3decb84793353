use crate::{config::ListenerConfig, platform::FileAccessSettings, tests::temp_dir};

use std::sync::Arc;

use media_bridge_core::{AccessSettings, ListenerState, SessionAccessGate};

/// WHAT: A missing settings file reads as an absent setting
/// WHY: Absent means nothing has been granted yet
#[test]
fn given_missing_file_when_reading_then_none() {
    // Given
    let dir = temp_dir();
    let settings = FileAccessSettings::in_config_dir(&dir);

    // When/Then
    assert_eq!(settings.enabled_listeners().unwrap(), None);

    std::fs::remove_dir_all(dir).unwrap();
}

/// WHAT: The created template grants nothing
/// WHY: Access must be an explicit user action
#[test]
fn given_fresh_template_when_reading_then_empty_setting() {
    // Given
    let dir = temp_dir();
    let settings = FileAccessSettings::in_config_dir(&dir);

    // When
    settings.ensure_exists().unwrap();

    // Then
    assert!(settings.path().exists());
    assert_eq!(settings.enabled_listeners().unwrap(), Some(String::new()));

    std::fs::remove_dir_all(dir).unwrap();
}

/// WHAT: Existing files are not overwritten by ensure_exists
/// WHY: Starting the bridge must not revoke access
#[test]
fn given_existing_file_when_ensuring_then_contents_kept() {
    // Given
    let dir = temp_dir();
    let settings = FileAccessSettings::in_config_dir(&dir);
    std::fs::write(settings.path(), "a/b\n").unwrap();

    // When
    settings.ensure_exists().unwrap();

    // Then
    assert_eq!(settings.enabled_listeners().unwrap(), Some("a/b".to_string()));

    std::fs::remove_dir_all(dir).unwrap();
}

/// WHAT: Comments are skipped and lines are joined into one setting
/// WHY: Users edit the file by hand, one entry per line
#[test]
fn given_lines_and_comments_when_reading_then_joined_with_colons() {
    // Given
    let dir = temp_dir();
    let settings = FileAccessSettings::in_config_dir(&dir);
    std::fs::write(
        settings.path(),
        "# header\norg.one/org.one.L\n\n  org.two/.L  \n# trailing\n",
    )
    .unwrap();

    // When/Then
    assert_eq!(
        settings.enabled_listeners().unwrap(),
        Some("org.one/org.one.L:org.two/.L".to_string())
    );

    std::fs::remove_dir_all(dir).unwrap();
}

/// WHAT: Editing the file grants and revokes access without a restart
/// WHY: Permission is read live on every check
#[test]
fn given_gate_over_file_when_file_edited_then_permission_follows() {
    // Given: Gate over an empty settings file for the default listener
    let dir = temp_dir();
    let settings = FileAccessSettings::in_config_dir(&dir);
    settings.ensure_exists().unwrap();
    let path = settings.path().to_path_buf();
    let component = ListenerConfig::default().component();
    let gate = SessionAccessGate::new(
        settings,
        component.clone(),
        Arc::new(ListenerState::new()),
    );
    assert!(!gate.has_permission());

    // When: The user adds our component
    std::fs::write(&path, format!("other/x.Y\n{}\n", component.flatten_to_string())).unwrap();

    // Then: Granted
    assert!(gate.has_permission());

    // When: The user removes it again
    std::fs::write(&path, "other/x.Y\n").unwrap();

    // Then: Revoked
    assert!(!gate.has_permission());

    std::fs::remove_dir_all(dir).unwrap();
}

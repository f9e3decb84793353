#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

mod app;
mod dispatch_loop;
mod file_access_settings;
mod listener_service;

use std::path::PathBuf;

use uuid::Uuid;

/// Fresh, empty directory under the system temp dir.
pub(crate) fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("media-bridge-test-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

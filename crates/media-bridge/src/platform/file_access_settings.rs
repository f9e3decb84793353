use media_bridge_core::{AccessSettings, CoreResult, MediaError};

use std::{
    fs,
    io::ErrorKind,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// File name of the enabled-listeners setting inside the config directory.
pub(crate) const ENABLED_LISTENERS_FILE: &str = "enabled_notification_listeners";

const TEMPLATE: &str = "\
# Notification listeners allowed to observe media sessions.
# One component per line (or ':'-separated), e.g. media_bridge/media_bridge.MediaControlListener
";

/// Enabled-listeners setting stored in a plain text file.
///
/// Read on every query so edits take effect without a restart. Lines
/// starting with `#` are comments; remaining lines are joined with `:`.
pub struct FileAccessSettings {
    path: PathBuf,
}

impl FileAccessSettings {
    /// Setting stored at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Setting stored in `config_dir`.
    pub fn in_config_dir(config_dir: &Path) -> Self {
        Self::new(config_dir.join(ENABLED_LISTENERS_FILE))
    }

    /// Path of the setting file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the setting file with a commented template if it is missing.
    ///
    /// A fresh file grants nothing.
    #[track_caller]
    #[instrument(skip(self), fields(path = ?self.path))]
    pub fn ensure_exists(&self) -> CoreResult<()> {
        if self.path.exists() {
            return Ok(());
        }

        fs::write(&self.path, TEMPLATE).map_err(|e| MediaError::SettingsUnavailable {
            reason: format!("Failed to create {}: {}", self.path.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        debug!("Created enabled listeners file");

        Ok(())
    }
}

impl AccessSettings for FileAccessSettings {
    fn enabled_listeners(&self) -> CoreResult<Option<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(MediaError::SettingsUnavailable {
                    reason: format!("Failed to read {}: {}", self.path.display(), e),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        let entries: Vec<&str> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        Ok(Some(entries.join(":")))
    }

    #[instrument(skip(self), fields(path = ?self.path))]
    fn open_listener_settings(&self) -> CoreResult<()> {
        self.ensure_exists()?;

        open::that(&self.path).map_err(|e| MediaError::SettingsUnavailable {
            reason: format!("Failed to open {}: {}", self.path.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!("Opened enabled listeners file");

        Ok(())
    }
}

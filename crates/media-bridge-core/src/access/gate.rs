use crate::{AccessSettings, CoreResult, ListenerComponent, ListenerState, MediaError};

use std::{panic::Location, sync::Arc};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// Decides whether this process may reach media sessions.
///
/// The permission answer always comes from the live host setting. The cached
/// [`ListenerState`] only reports whether the listener is connected and is
/// never used to grant access.
pub struct SessionAccessGate<A> {
    settings: A,
    component: ListenerComponent,
    listener: Arc<ListenerState>,
}

impl<A: AccessSettings> SessionAccessGate<A> {
    /// Gate over `settings` for `component`, sharing `listener` with the
    /// listener lifecycle.
    pub fn new(settings: A, component: ListenerComponent, listener: Arc<ListenerState>) -> Self {
        Self {
            settings,
            component,
            listener,
        }
    }

    /// The listener component whose access is checked.
    pub fn component(&self) -> &ListenerComponent {
        &self.component
    }

    /// Whether listener access is granted right now.
    ///
    /// An unreadable setting is logged and treated as not granted.
    #[instrument(skip(self), fields(component = %self.component))]
    pub fn has_permission(&self) -> bool {
        let granted = match self.settings.enabled_listeners() {
            Ok(Some(setting)) => self.component.is_listed_in(&setting),
            Ok(None) => false,
            Err(e) => {
                warn!(error = ?e, "Failed to read enabled listeners");
                false
            }
        };

        debug!(
            granted,
            listener_connected = self.listener.is_connected(),
            "Checked notification access"
        );

        granted
    }

    /// `Ok(())` when access is granted, otherwise [`MediaError::PermissionDenied`].
    #[track_caller]
    pub fn require_permission(&self) -> CoreResult<()> {
        if self.has_permission() {
            Ok(())
        } else {
            Err(MediaError::PermissionDenied {
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }

    /// Open the host screen where the user grants listener access.
    #[instrument(skip(self), fields(component = %self.component))]
    pub fn request_permission(&self) -> CoreResult<()> {
        self.settings.open_listener_settings()?;
        info!("Opened notification access settings");
        Ok(())
    }

    /// Cached listener connection flag, for diagnostics only.
    pub fn is_listener_connected(&self) -> bool {
        self.listener.is_connected()
    }
}

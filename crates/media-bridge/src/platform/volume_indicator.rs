use media_bridge_core::VolumeDirection;

use notify_rust::Notification;
use tracing::{debug, warn};

const APP_NAME: &str = "Media Bridge";

/// Notification text for a volume change, with the new level when known.
pub(crate) fn indicator_body(direction: VolumeDirection, level: Option<f64>) -> String {
    let verb = match direction {
        VolumeDirection::Raise => "raised",
        VolumeDirection::Lower => "lowered",
    };

    match level {
        Some(level) => {
            let percent = (level.clamp(0.0, 1.0) * 100.0).round() as u8;
            format!("Volume {} to {}%", verb, percent)
        }
        None => format!("Volume {}", verb),
    }
}

/// Show a desktop notification for a volume change.
///
/// A notification failure is logged; the volume change itself already happened.
// Windows raises its own volume flyout from the media keys.
#[cfg_attr(target_os = "windows", allow(dead_code))]
pub(crate) fn show_volume_indicator(direction: VolumeDirection, level: Option<f64>) {
    let body = indicator_body(direction, level);

    match Notification::new()
        .appname(APP_NAME)
        .summary("Volume")
        .body(&body)
        .show()
    {
        Ok(_) => debug!(%body, "Volume indicator shown"),
        Err(e) => warn!(error = %e, "Failed to show volume indicator"),
    }
}

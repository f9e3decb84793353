use media_bridge_core::{CoreResult, MediaError, SystemVolume, VolumeAdjustment, VolumeDirection};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, instrument};

#[cfg(not(target_os = "windows"))]
use crate::platform::volume_indicator::show_volume_indicator;

#[track_caller]
fn mixer_failure(reason: String) -> MediaError {
    MediaError::TransportFailure {
        reason,
        location: ErrorLocation::from(Location::caller()),
    }
}

/// System-wide output volume.
///
/// - Linux and other Unix desktops: the default PipeWire sink through `wpctl`.
/// - macOS: the output volume through `osascript`.
/// - Windows: volume media keys, one key press per 2%.
pub struct SystemMixer {
    step_percent: u8,
}

impl SystemMixer {
    /// Mixer that moves `step_percent` per adjustment.
    pub fn new(step_percent: u8) -> Self {
        Self { step_percent }
    }

    /// `wpctl` volume argument for one step, e.g. `5%+`.
    #[cfg(all(unix, not(target_os = "macos")))]
    pub(crate) fn step_argument(&self, direction: VolumeDirection) -> String {
        let sign = match direction {
            VolumeDirection::Raise => '+',
            VolumeDirection::Lower => '-',
        };
        format!("{}%{}", self.step_percent, sign)
    }

    /// AppleScript that moves the output volume one step and returns the new level.
    #[cfg(target_os = "macos")]
    pub(crate) fn volume_script(&self, direction: VolumeDirection) -> String {
        let operator = match direction {
            VolumeDirection::Raise => '+',
            VolumeDirection::Lower => '-',
        };
        format!(
            "set volume output volume ((output volume of (get volume settings)) {} {})\n\
             return output volume of (get volume settings)",
            operator, self.step_percent
        )
    }

    /// Volume key presses for one step. Each press moves Windows by 2%.
    #[cfg(target_os = "windows")]
    pub(crate) fn key_presses(&self) -> u32 {
        (u32::from(self.step_percent) / 2).max(1)
    }
}

/// Level from `wpctl get-volume` output such as `Volume: 0.45 [MUTED]`.
#[cfg(all(unix, not(target_os = "macos")))]
pub(crate) fn parse_wpctl_volume(output: &str) -> Option<f64> {
    output
        .trim()
        .strip_prefix("Volume:")?
        .split_whitespace()
        .next()?
        .parse()
        .ok()
}

/// Level from the `0`-`100` output volume printed by `osascript`.
#[cfg(target_os = "macos")]
pub(crate) fn parse_osascript_volume(output: &str) -> Option<f64> {
    output
        .trim()
        .parse::<f64>()
        .ok()
        .map(|percent| percent / 100.0)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn read_wpctl_volume() -> Option<f64> {
    let output = std::process::Command::new("wpctl")
        .args(["get-volume", "@DEFAULT_AUDIO_SINK@"])
        .output()
        .ok()?;

    parse_wpctl_volume(&String::from_utf8_lossy(&output.stdout))
}

#[cfg(target_os = "windows")]
fn send_volume_keys(direction: VolumeDirection, presses: u32) -> CoreResult<()> {
    use windows::Win32::UI::Input::KeyboardAndMouse::{
        INPUT, INPUT_0, INPUT_KEYBOARD, KEYBD_EVENT_FLAGS, KEYBDINPUT, KEYEVENTF_KEYUP, SendInput,
        VK_VOLUME_DOWN, VK_VOLUME_UP,
    };

    let key = match direction {
        VolumeDirection::Raise => VK_VOLUME_UP,
        VolumeDirection::Lower => VK_VOLUME_DOWN,
    };

    let event = |flags: KEYBD_EVENT_FLAGS| INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: key,
                wScan: 0,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    };

    let inputs: Vec<INPUT> = (0..presses)
        .flat_map(|_| [event(KEYBD_EVENT_FLAGS(0)), event(KEYEVENTF_KEYUP)])
        .collect();

    // SAFETY: every element is a fully initialised keyboard INPUT.
    let sent = unsafe { SendInput(&inputs, std::mem::size_of::<INPUT>() as i32) };

    if sent as usize != inputs.len() {
        return Err(mixer_failure(format!(
            "SendInput delivered {} of {} volume key events",
            sent,
            inputs.len()
        )));
    }

    Ok(())
}

impl SystemVolume for SystemMixer {
    #[cfg(all(unix, not(target_os = "macos")))]
    #[instrument(skip(self))]
    fn adjust_volume(&self, adjustment: VolumeAdjustment) -> CoreResult<()> {
        let step = self.step_argument(adjustment.direction);

        // -l 1.0 caps raises at 100%.
        let status = std::process::Command::new("wpctl")
            .args(["set-volume", "-l", "1.0", "@DEFAULT_AUDIO_SINK@", &step])
            .status()
            .map_err(|e| mixer_failure(format!("Failed to run wpctl: {}", e)))?;

        if !status.success() {
            return Err(mixer_failure(format!("wpctl exited with {}", status)));
        }

        debug!(step = %step, "System volume adjusted");

        if adjustment.show_ui {
            show_volume_indicator(adjustment.direction, read_wpctl_volume());
        }

        Ok(())
    }

    #[cfg(target_os = "macos")]
    #[instrument(skip(self))]
    fn adjust_volume(&self, adjustment: VolumeAdjustment) -> CoreResult<()> {
        let output = std::process::Command::new("osascript")
            .arg("-e")
            .arg(self.volume_script(adjustment.direction))
            .output()
            .map_err(|e| mixer_failure(format!("Failed to run osascript: {}", e)))?;

        if !output.status.success() {
            return Err(mixer_failure(format!(
                "osascript failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let level = parse_osascript_volume(&String::from_utf8_lossy(&output.stdout));
        debug!(?level, "System volume adjusted");

        if adjustment.show_ui {
            show_volume_indicator(adjustment.direction, level);
        }

        Ok(())
    }

    #[cfg(target_os = "windows")]
    #[instrument(skip(self))]
    fn adjust_volume(&self, adjustment: VolumeAdjustment) -> CoreResult<()> {
        let presses = self.key_presses();
        send_volume_keys(adjustment.direction, presses)?;

        debug!(presses, "System volume adjusted");

        Ok(())
    }

    #[cfg(not(any(unix, target_os = "windows")))]
    #[instrument(skip(self))]
    fn adjust_volume(&self, adjustment: VolumeAdjustment) -> CoreResult<()> {
        debug!(direction = ?adjustment.direction, "System volume unsupported");
        Err(mixer_failure(
            "System volume control is not supported on this platform".to_string(),
        ))
    }
}

use crate::config::{default_show_volume_ui, default_volume_step_percent};

use serde::{Deserialize, Serialize};

/// Volume step configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeConfig {
    /// Percentage moved by one volumeUp/volumeDown, 1 to 100.
    #[serde(default = "default_volume_step_percent")]
    pub step_percent: u8,
    /// Show a volume notification after each change.
    #[serde(default = "default_show_volume_ui")]
    pub show_ui: bool,
}

impl VolumeConfig {
    /// Step as a fraction of full volume.
    pub fn step_fraction(&self) -> f64 {
        f64::from(self.step_percent) / 100.0
    }
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            step_percent: default_volume_step_percent(),
            show_ui: default_show_volume_ui(),
        }
    }
}

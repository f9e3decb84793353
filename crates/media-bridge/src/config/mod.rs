#[allow(clippy::module_inception)]
mod config;
mod listener_config;
mod volume_config;

pub(crate) use {config::Config, listener_config::ListenerConfig, volume_config::VolumeConfig};

pub(crate) const DEFAULT_LISTENER_PACKAGE: &str = "media_bridge";
pub(crate) const DEFAULT_LISTENER_CLASS: &str = "media_bridge.MediaControlListener";
pub(crate) const DEFAULT_VOLUME_STEP_PERCENT: u8 = 5;
pub(crate) const DEFAULT_SHOW_VOLUME_UI: bool = true;

pub(crate) fn default_listener_package() -> String {
    DEFAULT_LISTENER_PACKAGE.to_string()
}

pub(crate) fn default_listener_class() -> String {
    DEFAULT_LISTENER_CLASS.to_string()
}

pub(crate) fn default_volume_step_percent() -> u8 {
    DEFAULT_VOLUME_STEP_PERCENT
}

pub(crate) fn default_show_volume_ui() -> bool {
    DEFAULT_SHOW_VOLUME_UI
}

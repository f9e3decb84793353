mod method_result;
mod playback_state;
mod volume;

#[allow(clippy::module_inception)]
mod command;

pub use {
    command::Command,
    method_result::MethodResult,
    playback_state::PlaybackState,
    volume::{VolumeAdjustment, VolumeDirection},
};

/// Playback state reported by a media session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Session exists but has never played anything.
    None,
    /// Playback stopped.
    Stopped,
    /// Playback paused.
    Paused,
    /// Playback in progress.
    Playing,
    /// Fast forwarding.
    FastForwarding,
    /// Rewinding.
    Rewinding,
    /// Waiting for data; playback resumes on its own.
    Buffering,
    /// Session is in an error state.
    Error,
    /// Connecting to a remote output.
    Connecting,
    /// Skipping to the previous item.
    SkippingToPrevious,
    /// Skipping to the next item.
    SkippingToNext,
    /// Skipping to a queue item.
    SkippingToQueueItem,
}

impl PlaybackState {
    /// Whether a play/pause toggle should pause.
    ///
    /// Buffering counts as playing.
    pub fn is_playing(self) -> bool {
        matches!(self, PlaybackState::Playing | PlaybackState::Buffering)
    }
}

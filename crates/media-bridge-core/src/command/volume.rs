/// Direction of a single volume step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeDirection {
    /// One step up.
    Raise,
    /// One step down.
    Lower,
}

/// A volume step request passed to sessions and the system mixer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeAdjustment {
    /// Which way to move.
    pub direction: VolumeDirection,
    /// Ask the host to show its volume indicator.
    pub show_ui: bool,
}

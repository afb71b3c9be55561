/// Whether the auto-advance timer is running.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum PlaybackState {
    #[default]
    Paused, // Timer stopped: pointer over the track, explicitly stopped, or not yet initialized
    Auto,   // Timer running, calls next() every interval
}

impl PlaybackState {
    pub fn is_auto(self) -> bool {
        self == PlaybackState::Auto
    }
}

/// Point-in-time view of the playback flags shared between the input side and the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    pub sorting: bool,
    pub paused: bool,
    pub speed: u8,
}

impl PlaybackState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.sorting
    }
}

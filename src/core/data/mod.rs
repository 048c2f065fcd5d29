pub mod array_model;
pub mod playback_state;
pub mod sort_stats;
pub mod step_state;

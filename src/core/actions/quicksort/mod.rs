pub mod errors;
pub mod headless;
pub mod instrumented_quicksort;
pub mod ports;
pub mod recording;

pub use errors::SortError;
pub use headless::{HeadlessHooks, sort_headless};
pub use instrumented_quicksort::instrumented_quicksort;
pub use ports::SortHooks;
pub use recording::{RecordingHooks, TraceEvent};

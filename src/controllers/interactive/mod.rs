//! Interactive controller for the animated quicksort.
//!
//! This module provides the application layer for the visualizer: it owns the
//! sorting worker, accepts playback commands and dispatches step events to the
//! presentation layer.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: commands (`start`, `pause_toggle`, `reset`, `set_speed`) from the UI context
//! - **Output**: `SortPresenterPort` trait for receiving `SortEvent`s
//! - **Core**: Uses the instrumented sort and playback clock from `core/`

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::SortController;
pub use data::{RunSummary, VisualizerConfig};
pub use errors::AbortReason;
pub use events::SortEvent;
pub use ports::SortPresenterPort;

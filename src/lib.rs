mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use adapters::bar_raster::{BarLayout, Rgba, colour_for, draw_bars};
pub use controllers::cli::{TraceController, TraceReport};
pub use controllers::interactive::{
    AbortReason, RunSummary, SortController, SortEvent, SortPresenterPort, VisualizerConfig,
};
pub use controllers::ports::report_presenter::ReportPresenterPort;
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::quicksort::{
    RecordingHooks, SortError, SortHooks, TraceEvent, instrumented_quicksort, sort_headless,
};
pub use crate::core::data::array_model::{ArrayModel, ArrayModelError};
pub use crate::core::data::playback_state::PlaybackState;
pub use crate::core::data::sort_stats::SortStats;
pub use crate::core::data::step_state::{Highlight, StepState};
pub use crate::core::playback::PlaybackClock;
pub use presenters::text::report::TextReportPresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;

//! GUI input adapter for the animated quicksort.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for drawing the bars, and egui for the playback controls.

pub mod app;
pub mod commands;
pub mod events;

pub use events::GuiEvent;

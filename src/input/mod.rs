//! Input adapters for the quicksort visualizer.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into controller commands.

#[cfg(feature = "gui")]
pub mod gui;

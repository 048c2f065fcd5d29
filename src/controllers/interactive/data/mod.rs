pub mod run_summary;
pub mod visualizer_config;

pub use run_summary::RunSummary;
pub use visualizer_config::VisualizerConfig;

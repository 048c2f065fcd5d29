use clap::Parser;
use quicksort_visualizer::{PixelsPresenterFactory, RunGuiCommand, VisualizerConfig};
use tracing_subscriber::EnvFilter;

/// Animated quicksort with start, pause, reset and speed controls.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seed for the random bar heights; fresh entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Initial playback speed, 1 (slowest) to 100 (fastest)
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(1..=100))]
    speed: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = VisualizerConfig {
        seed: args.seed,
        initial_speed: args.speed,
        ..VisualizerConfig::default()
    };

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), config);

    command.execute()
}

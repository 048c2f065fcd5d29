use clap::Parser;
use quicksort_visualizer::{NeverCancel, TextReportPresenter, TraceController, VisualizerConfig};
use tracing_subscriber::EnvFilter;

/// Replays the instrumented quicksort over seeded random arrays and prints the counters.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of bars (array length)
    #[arg(long, default_value_t = 80)]
    bars: u32,

    /// Display height the bar values are derived from
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// First seed; run `i` uses `seed + i`
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of seeded runs
    #[arg(long, default_value_t = 8)]
    runs: usize,
}

impl Args {
    fn config(&self) -> VisualizerConfig {
        let defaults = VisualizerConfig::default();

        VisualizerConfig {
            display_width: self.bars.saturating_mul(defaults.bar_width),
            display_height: self.height,
            seed: Some(self.seed),
            ..defaults
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = TraceController::new(TextReportPresenter::new(), args.config(), args.runs);

    controller.trace(&NeverCancel)?;
    controller.write(std::io::stdout().lock())?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    run(&Args::parse())
}

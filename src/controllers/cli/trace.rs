use std::io::Write;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::controllers::interactive::data::visualizer_config::VisualizerConfig;
use crate::controllers::ports::report_presenter::ReportPresenterPort;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::quicksort::errors::SortError;
use crate::core::actions::quicksort::headless::sort_headless;
use crate::core::data::array_model::ArrayModel;
use crate::core::data::sort_stats::SortStats;

/// Outcome of replaying one seeded array without pacing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceReport {
    pub seed: u64,
    pub len: usize,
    pub stats: SortStats,
    pub sorted: bool,
    pub permutation: bool,
}

/// Replays the instrumented sort over consecutive seeds in parallel.
pub struct TraceController<P: ReportPresenterPort> {
    presenter: P,
    config: VisualizerConfig,
    runs: usize,
    reports: Vec<TraceReport>,
}

impl<P: ReportPresenterPort> TraceController<P> {
    pub fn new(presenter: P, config: VisualizerConfig, runs: usize) -> Self {
        Self {
            presenter,
            config,
            runs,
            reports: Vec::new(),
        }
    }

    pub fn trace<C: CancelToken>(&mut self, cancel: &C) -> Result<&[TraceReport], SortError> {
        self.config.validate()?;

        let first_seed = self.config.seed.unwrap_or(0);
        let len = self.config.bar_count();
        let value_range = self.config.value_range();

        tracing::info!(runs = self.runs, len, first_seed, "tracing sort runs");
        let start = Instant::now();

        let reports = (0..self.runs as u64)
            .into_par_iter()
            .map(|offset| -> Result<TraceReport, SortError> {
                let seed = first_seed.wrapping_add(offset);
                let mut rng = StdRng::seed_from_u64(seed);
                let array = ArrayModel::random(len, value_range.clone(), &mut rng)?;

                let mut expected = array.snapshot();
                expected.sort_unstable();

                let stats = sort_headless(&array, cancel)?;
                let values = array.snapshot();

                Ok(TraceReport {
                    seed,
                    len,
                    stats,
                    sorted: values.windows(2).all(|w| w[0] <= w[1]),
                    permutation: values == expected,
                })
            })
            .collect::<Result<Vec<_>, SortError>>()?;

        tracing::info!(duration_ms = start.elapsed().as_millis() as u64, "trace complete");

        self.reports = reports;
        Ok(&self.reports)
    }

    #[must_use]
    pub fn reports(&self) -> &[TraceReport] {
        &self.reports
    }

    pub fn write(&self, out: impl Write) -> std::io::Result<()> {
        self.presenter.present(&self.reports, out)
    }
}

use crate::controllers::cli::trace::TraceReport;
use crate::controllers::ports::report_presenter::ReportPresenterPort;
use std::io::Write;

/// Writes one line per traced run followed by a totals line.
pub struct TextReportPresenter {}

impl ReportPresenterPort for TextReportPresenter {
    fn present(&self, reports: &[TraceReport], mut out: impl Write) -> std::io::Result<()> {
        for report in reports {
            writeln!(
                out,
                "seed={} len={} comparisons={} swaps={} effective_swaps={} steps={} sorted={} permutation={}",
                report.seed,
                report.len,
                report.stats.comparisons,
                report.stats.swaps,
                report.stats.effective_swaps,
                report.stats.steps,
                report.sorted,
                report.permutation
            )?;
        }

        let failures = reports
            .iter()
            .filter(|report| !(report.sorted && report.permutation))
            .count();
        let total_swaps: u64 = reports.iter().map(|report| report.stats.swaps).sum();

        writeln!(
            out,
            "runs={} total_swaps={} failures={}",
            reports.len(),
            total_swaps,
            failures
        )?;

        Ok(())
    }
}

impl Default for TextReportPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextReportPresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::sort_stats::SortStats;

    #[test]
    fn test_present_writes_run_lines_and_totals() {
        let reports = vec![
            TraceReport {
                seed: 1,
                len: 4,
                stats: SortStats {
                    comparisons: 5,
                    swaps: 3,
                    effective_swaps: 2,
                    steps: 10,
                },
                sorted: true,
                permutation: true,
            },
            TraceReport {
                seed: 2,
                len: 4,
                stats: SortStats {
                    comparisons: 6,
                    swaps: 4,
                    effective_swaps: 1,
                    steps: 11,
                },
                sorted: false,
                permutation: true,
            },
        ];
        let mut out = Vec::new();

        TextReportPresenter::new().present(&reports, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "seed=1 len=4 comparisons=5 swaps=3 effective_swaps=2 steps=10 sorted=true permutation=true"
        );
        assert_eq!(lines[2], "runs=2 total_swaps=7 failures=1");
    }

    #[test]
    fn test_present_with_no_reports_writes_totals_only() {
        let mut out = Vec::new();

        TextReportPresenter::new().present(&[], &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "runs=0 total_swaps=0 failures=0\n");
    }
}

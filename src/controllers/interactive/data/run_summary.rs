use std::time::Duration;
use crate::core::data::sort_stats::SortStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub run_id: u64,
    pub stats: SortStats,
    pub duration: Duration,
}

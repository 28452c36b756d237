//! Summary statistics for a finished crawl

use crate::crawler::ResultSet;
use crate::extract::UNKNOWN_DATE;

/// Counts derived from a [`ResultSet`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStatistics {
    pub total_records: usize,
    pub seed_records: usize,
    pub discovered_records: usize,

    /// Records whose date could not be determined
    pub unknown_dates: usize,

    /// Records with an empty title
    pub untitled: usize,
}

impl ReportStatistics {
    pub fn from_results(results: &ResultSet) -> Self {
        let mut stats = Self {
            total_records: results.len(),
            seed_records: results.seed_results().len(),
            discovered_records: results.discovered_results().len(),
            ..Self::default()
        };

        for record in results.records() {
            if record.last_updated == UNKNOWN_DATE {
                stats.unknown_dates += 1;
            }
            if record.title.is_empty() {
                stats.untitled += 1;
            }
        }

        stats
    }

    /// Share of records with a known date, in percent
    pub fn date_coverage(&self) -> f64 {
        if self.total_records == 0 {
            return 0.0;
        }
        let dated = self.total_records - self.unknown_dates;
        (dated as f64 / self.total_records as f64) * 100.0
    }
}

/// Logs the statistics at `info`
///
/// Goes through `tracing` rather than stdout, which may be carrying the CSV.
pub fn log_statistics(stats: &ReportStatistics) {
    tracing::info!(
        "Report: {} records ({} seed, {} discovered)",
        stats.total_records,
        stats.seed_records,
        stats.discovered_records
    );
    tracing::info!(
        "Date coverage: {:.1}% ({} unknown), {} untitled pages",
        stats.date_coverage(),
        stats.unknown_dates,
        stats.untitled
    );
}

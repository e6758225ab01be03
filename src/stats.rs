//! `SearchStats` collects scan counters for a single search. The library
//! never prints; callers decide whether to `report`.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct SearchStats {
    start_time: Instant,
    /// Distinct non-empty words after deduplication.
    pub distinct_words: usize,
    /// First-letter groups processed.
    pub groups: usize,
    /// Rows containing a group's key letter.
    pub rows_scanned: usize,
    /// Rows skipped because the key letter is absent.
    pub rows_skipped: usize,
    /// Columns scheduled for scanning, summed over groups.
    pub column_scans: usize,
    /// Words with a nonzero tally.
    pub matched_words: usize,
}

impl Default for SearchStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStats {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            distinct_words: 0,
            groups: 0,
            rows_scanned: 0,
            rows_skipped: 0,
            column_scans: 0,
            matched_words: 0,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn report(&self) {
        eprintln!(
            "Search complete in {:.2?}: {} words in {} groups, rows scanned {} (skipped {}), column scans {}, matched words {}",
            self.elapsed(),
            self.distinct_words,
            self.groups,
            self.rows_scanned,
            self.rows_skipped,
            self.column_scans,
            self.matched_words,
        );
    }
}

//! Crawl state and termination policy
//!
//! The orchestrator threads an explicit [`CrawlState`] value through the run
//! instead of keeping a process-wide flag, so the termination decision can be
//! exercised in isolation against synthetic page summaries.

/// Pagination state, reset at the start of every run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlState {
    /// The list page the orchestrator will fetch next (1-based)
    pub current_page: u32,

    /// Whether pagination may advance past the current page
    pub keep_going: bool,
}

impl CrawlState {
    /// Initial state: page 1, pagination open
    pub fn new() -> Self {
        Self {
            current_page: 1,
            keep_going: true,
        }
    }

    /// Applies the termination policy to one fully processed page
    ///
    /// Encountering any already-seen item on a page is treated as having
    /// reached previously-crawled territory, and pagination stops. This is
    /// deliberately blunt: a duplicate interleaved with new items on the same
    /// page still ends the run, trading completeness for never re-walking
    /// older, already-indexed pages.
    pub fn record_page(&mut self, summary: &PageSummary) {
        if summary.skipped > 0 && summary.skipped <= summary.total {
            self.keep_going = false;
        }
    }

    /// Returns true while the run may fetch the current page
    ///
    /// `max_pages` is the externally supplied page budget.
    pub fn should_fetch(&self, max_pages: u32) -> bool {
        self.keep_going && self.current_page <= max_pages
    }

    /// Advances to the next page
    pub fn advance(&mut self) {
        self.current_page += 1;
    }
}

impl Default for CrawlState {
    fn default() -> Self {
        Self::new()
    }
}

/// What happened on one list page, observed in full before the termination
/// policy runs
#[derive(Debug, Clone, Copy, Default)]
pub struct PageSummary {
    /// Number of entries the page yielded
    pub total: usize,

    /// Entries skipped because their fingerprint was already stored
    pub skipped: usize,

    /// Entries enriched and inserted this run
    pub inserted: usize,
}

/// Why a run reached its terminal Done state
///
/// Transport-level failure on a list page is not represented here; it aborts
/// the run with an error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The page budget was exhausted with pagination still open
    BudgetExhausted,

    /// A list page came back with no entries
    EmptyPage,

    /// The termination policy tripped on an already-seen item
    PreviouslySeen,

    /// An external stop request ended the run between fetches
    Interrupted,
}

/// Aggregate result of a completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub pages_fetched: u32,
    pub records_inserted: u64,
    pub entries_skipped: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(total: usize, skipped: usize) -> PageSummary {
        PageSummary {
            total,
            skipped,
            inserted: total - skipped,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = CrawlState::new();
        assert_eq!(state.current_page, 1);
        assert!(state.keep_going);
    }

    #[test]
    fn test_clean_page_keeps_going() {
        let mut state = CrawlState::new();
        state.record_page(&summary(10, 0));
        assert!(state.keep_going);
    }

    #[test]
    fn test_single_duplicate_stops_pagination() {
        let mut state = CrawlState::new();
        state.record_page(&summary(10, 1));
        assert!(!state.keep_going);
    }

    #[test]
    fn test_fully_duplicate_page_stops_pagination() {
        let mut state = CrawlState::new();
        state.record_page(&summary(10, 10));
        assert!(!state.keep_going);
    }

    #[test]
    fn test_empty_page_does_not_trip_policy() {
        // An empty page terminates the run elsewhere; the policy itself
        // only reacts to skips.
        let mut state = CrawlState::new();
        state.record_page(&summary(0, 0));
        assert!(state.keep_going);
    }

    #[test]
    fn test_termination_is_monotonic() {
        let mut state = CrawlState::new();
        state.record_page(&summary(5, 2));
        assert!(!state.keep_going);

        // A later clean page must not reopen pagination.
        state.record_page(&summary(5, 0));
        assert!(!state.keep_going);
        assert!(!state.should_fetch(100));
    }

    #[test]
    fn test_page_budget() {
        let mut state = CrawlState::new();
        assert!(state.should_fetch(2));
        state.advance();
        assert!(state.should_fetch(2));
        state.advance();
        assert!(!state.should_fetch(2));
    }
}

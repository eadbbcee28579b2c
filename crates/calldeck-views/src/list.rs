//! Call-list view state machine
//!
//! An explicit idle/loading/success/error machine replaces the ad-hoc
//! loading flags of the original dashboard. Each load hands out a
//! generation token; a resolution carrying a stale token is ignored, which
//! closes the race where a late response from a superseded page could
//! overwrite newer state.

use tracing::{debug, warn};

use calldeck_core::models::{CallPage, CallRecord, CallStats};
use calldeck_core::AppError;

/// Fetch lifecycle of a paginated view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// State of the paginated call-list view
#[derive(Debug, Default)]
pub struct ListView {
    phase: FetchPhase,
    page: u64,
    page_size: u64,
    total_pages: u64,
    records: Vec<CallRecord>,
    stats: CallStats,
    selected: Option<CallRecord>,
    generation: u64,
    last_error: Option<String>,
}

impl ListView {
    /// New view at page 1 with a fixed page size (constant for its life)
    pub fn new(page_size: u64) -> Self {
        Self {
            page: 1,
            page_size,
            total_pages: 1,
            ..Default::default()
        }
    }

    /// Begin a load for the current page.
    ///
    /// Transitions to `Loading` and returns the generation token the
    /// caller must pass back to [`resolve`](Self::resolve). Starting a new
    /// load invalidates every earlier token.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = FetchPhase::Loading;
        self.generation
    }

    /// Resolve a load with the fetch result.
    ///
    /// A stale generation is dropped without touching state. On success
    /// the page replaces the record set wholesale and stats are recomputed;
    /// on error the view lands in `Error` with the previous records intact
    /// (degraded but usable, never a perpetual spinner).
    pub fn resolve(&mut self, generation: u64, result: Result<CallPage, AppError>) {
        if generation != self.generation {
            debug!(
                stale = generation,
                current = self.generation,
                "dropping stale page response"
            );
            return;
        }

        match result {
            Ok(page) => {
                self.phase = FetchPhase::Success;
                self.total_pages = page.total_pages.max(1);
                self.records = page.records;
                self.stats = CallStats::from_records(&self.records);
                self.last_error = None;
            }
            Err(e) => {
                warn!("call page fetch failed: {e}");
                self.phase = FetchPhase::Error;
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Substitute the static fallback dataset after a failed load.
    ///
    /// The phase stays `Error`; only the table contents change so the view
    /// is not left empty.
    pub fn substitute_fallback(&mut self, page: CallPage) {
        if self.phase != FetchPhase::Error {
            return;
        }
        self.total_pages = page.total_pages.max(1);
        self.records = page.records;
        self.stats = CallStats::from_records(&self.records);
    }

    /// Whether the "Previous" control is enabled
    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether the "Next" control is enabled
    pub fn can_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Go back one page. No-op at page 1. Returns whether the page moved;
    /// the driver re-runs the load cycle when it did.
    pub fn prev_page(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Advance one page. No-op at the last known page.
    pub fn next_page(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Select a row for the detail view. Copies the record; no refetch.
    pub fn select(&mut self, index: usize) -> Option<&CallRecord> {
        self.selected = self.records.get(index).cloned();
        self.selected.as_ref()
    }

    /// Close the detail view
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn records(&self) -> &[CallRecord] {
        &self.records
    }

    pub fn stats(&self) -> &CallStats {
        &self.stats
    }

    pub fn selected(&self) -> Option<&CallRecord> {
        self.selected.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

//! Outbound batch drill-down view state machine
//!
//! Same fetch lifecycle as the call list (including the generation-token
//! guard), paging over batches instead of records. Expanding a batch shows
//! its member sub-table; selecting a member opens the detail view for that
//! call. Batch counts are rendered as reported - a mismatch against the
//! member list is logged, never corrected.

use tracing::{debug, warn};

use calldeck_core::models::{BatchPage, CallBatch, CallRecord};
use calldeck_core::AppError;

use crate::list::FetchPhase;

/// State of the outbound batch list and its drill-down
#[derive(Debug, Default)]
pub struct BatchView {
    phase: FetchPhase,
    page: u64,
    page_size: u64,
    total_pages: u64,
    batches: Vec<CallBatch>,
    expanded: Option<CallBatch>,
    selected_call: Option<CallRecord>,
    generation: u64,
    last_error: Option<String>,
}

impl BatchView {
    /// New view at page 1 with a fixed page size
    pub fn new(page_size: u64) -> Self {
        Self {
            page: 1,
            page_size,
            total_pages: 1,
            ..Default::default()
        }
    }

    /// Begin a load for the current page; see [`crate::ListView::begin_load`]
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = FetchPhase::Loading;
        self.generation
    }

    /// Resolve a load. Stale generations are dropped. This view has no
    /// fallback dataset: a failure just lands in `Error` with the previous
    /// batches intact.
    pub fn resolve(&mut self, generation: u64, result: Result<BatchPage, AppError>) {
        if generation != self.generation {
            debug!(
                stale = generation,
                current = self.generation,
                "dropping stale batch response"
            );
            return;
        }

        match result {
            Ok(page) => {
                self.phase = FetchPhase::Success;
                self.total_pages = page.total_pages.max(1);
                self.batches = page.batches;
                self.last_error = None;
            }
            Err(e) => {
                warn!("batch page fetch failed: {e}");
                self.phase = FetchPhase::Error;
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Expand one batch into its member sub-table. Copies the batch.
    pub fn expand(&mut self, index: usize) -> Option<&CallBatch> {
        let batch = self.batches.get(index)?;
        if !batch.member_count_matches() {
            warn!(
                batch_id = %batch.batch_id,
                reported = batch.total_calls,
                members = batch.calls.len(),
                "expanding batch whose counts disagree with its member list"
            );
        }
        self.expanded = Some(batch.clone());
        self.selected_call = None;
        self.expanded.as_ref()
    }

    /// Collapse the drill-down
    pub fn collapse(&mut self) {
        self.expanded = None;
        self.selected_call = None;
    }

    /// Select a member of the expanded batch for the detail view
    pub fn select_member(&mut self, index: usize) -> Option<&CallRecord> {
        let expanded = self.expanded.as_ref()?;
        self.selected_call = expanded.calls.get(index).cloned();
        self.selected_call.as_ref()
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Go back one page; no-op at page 1
    pub fn prev_page(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Advance one page; no-op at the last known page
    pub fn next_page(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.page += 1;
        true
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

    pub fn batches(&self) -> &[CallBatch] {
        &self.batches
    }

    pub fn expanded(&self) -> Option<&CallBatch> {
        self.expanded.as_ref()
    }

    pub fn selected_call(&self) -> Option<&CallRecord> {
        self.selected_call.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(id: &str, total: u64, member_ids: &[&str]) -> CallBatch {
        CallBatch {
            batch_id: id.to_string(),
            total_calls: total,
            calls: member_ids
                .iter()
                .map(|call_id| CallRecord {
                    call_id: (*call_id).to_string(),
                    batch_id: Some(id.to_string()),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn page_with(batches: Vec<CallBatch>, page: u64, total_pages: u64) -> BatchPage {
        BatchPage {
            page,
            total_pages,
            batches,
        }
    }

    #[test]
    fn test_load_and_drill_down() {
        let mut view = BatchView::new(20);
        let generation = view.begin_load();
        view.resolve(
            generation,
            Ok(page_with(vec![batch("b-1", 2, &["c-1", "c-2"])], 1, 1)),
        );

        assert_eq!(view.phase(), FetchPhase::Success);
        assert_eq!(view.batches().len(), 1);

        let expanded = view.expand(0).unwrap();
        assert_eq!(expanded.batch_id, "b-1");

        let member = view.select_member(1).unwrap();
        assert_eq!(member.call_id, "c-2");

        view.collapse();
        assert!(view.expanded().is_none());
        assert!(view.selected_call().is_none());
    }

    #[test]
    fn test_expand_out_of_range() {
        let mut view = BatchView::new(20);
        assert!(view.expand(0).is_none());
    }

    #[test]
    fn test_mismatched_counts_still_render() {
        let mut view = BatchView::new(20);
        let generation = view.begin_load();
        // Reported 5 calls, only one member document came back.
        view.resolve(
            generation,
            Ok(page_with(vec![batch("b-2", 5, &["c-1"])], 1, 1)),
        );

        let expanded = view.expand(0).unwrap();
        assert_eq!(expanded.total_calls, 5);
        assert_eq!(expanded.calls.len(), 1);
    }

    #[test]
    fn test_error_has_no_fallback() {
        let mut view = BatchView::new(20);
        let generation = view.begin_load();
        view.resolve(generation, Err(AppError::Upstream("down".to_string())));

        assert_eq!(view.phase(), FetchPhase::Error);
        assert!(view.batches().is_empty());
        assert!(view.last_error().is_some());
    }

    #[test]
    fn test_stale_batch_response_is_dropped() {
        let mut view = BatchView::new(20);
        let first = view.begin_load();
        let second = view.begin_load();

        view.resolve(first, Ok(page_with(vec![batch("old", 0, &[])], 1, 1)));
        assert_eq!(view.phase(), FetchPhase::Loading);

        view.resolve(second, Ok(page_with(vec![batch("new", 0, &[])], 1, 1)));
        assert_eq!(view.batches()[0].batch_id, "new");
    }

    #[test]
    fn test_pagination_boundaries() {
        let mut view = BatchView::new(20);
        let generation = view.begin_load();
        view.resolve(generation, Ok(page_with(vec![], 1, 2)));

        assert!(!view.prev_page());
        assert!(view.next_page());
        assert!(!view.next_page());
        assert_eq!(view.page(), 2);
    }
}

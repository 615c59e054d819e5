//! CatalogState - Lazy Pagination State Machine
//!
//! Owns the current page window (offset and page size), the rows loaded for
//! it, and the authoritative total reported by the server. Each fetch is
//! tagged with a generation counter; a response is applied only when its tag
//! matches the latest generation, so raced fetches resolve to
//! last-request-wins instead of last-response-wins.

use std::sync::Arc;

use crate::domain::artwork::Artwork;

/// State for the paginated catalog view
#[derive(Debug, Clone)]
pub struct CatalogState {
    /// Index of the first row of the current page. Always a multiple of
    /// `page_size`.
    offset: u64,
    /// Rows per page, at least 1
    page_size: u64,
    /// Rows of the current page, replaced wholesale on every fetch
    rows: Vec<Artwork>,
    /// Total record count as last reported by the server. Not reconciled
    /// between fetches.
    total: u64,
    /// Whether a page fetch is in flight
    loading: bool,
    /// Message of the last failed fetch, cleared on the next fetch
    error: Option<Arc<str>>,
    /// Tag of the most recent fetch
    generation: u64,
}

impl CatalogState {
    pub fn new(page_size: u64) -> Self {
        Self {
            offset: 0,
            page_size: page_size.max(1),
            rows: Vec::new(),
            total: 0,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    pub fn rows(&self) -> &[Artwork] {
        &self.rows
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 1-based page number of the current window
    pub fn page_number(&self) -> u64 {
        self.offset / self.page_size + 1
    }

    pub fn total_pages(&self) -> u64 {
        if self.total == 0 {
            return 1;
        }
        self.total.div_ceil(self.page_size)
    }

    /// Start a fetch for the window beginning at `offset`. The offset is
    /// snapped down to a page boundary. Returns the generation tag the
    /// response must carry to be applied.
    pub fn begin_fetch(&mut self, offset: u64, page_size: u64) -> u64 {
        let page_size = page_size.max(1);
        self.offset = offset - offset % page_size;
        self.page_size = page_size;
        self.loading = true;
        self.error = None;
        self.generation += 1;
        self.generation
    }

    /// Apply a fetched page. Returns false when the response is stale and
    /// was discarded.
    pub fn apply_page(&mut self, generation: u64, rows: Vec<Artwork>, total: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.rows = rows;
        self.total = total;
        self.loading = false;
        self.error = None;
        true
    }

    /// Record a failed fetch. Returns false when the failure is stale and
    /// was discarded.
    pub fn fail_fetch(&mut self, generation: u64, message: impl Into<Arc<str>>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        self.error = Some(message.into());
        true
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artworks(ids: std::ops::Range<i64>) -> Vec<Artwork> {
        ids.map(|id| Artwork {
            id,
            ..Default::default()
        })
        .collect()
    }

    #[test]
    fn test_page_number_from_offset() {
        for page_size in [1u64, 5, 12, 50] {
            for page_index in 0u64..20 {
                let mut state = CatalogState::new(page_size);
                state.begin_fetch(page_index * page_size, page_size);
                assert_eq!(state.page_number(), page_index + 1);
            }
        }
    }

    #[test]
    fn test_begin_fetch_snaps_offset_to_page_boundary() {
        let mut state = CatalogState::new(12);
        state.begin_fetch(30, 12);
        assert_eq!(state.offset(), 24);
        assert_eq!(state.page_number(), 3);
    }

    #[test]
    fn test_apply_page_replaces_rows_and_total() {
        let mut state = CatalogState::new(12);
        let generation = state.begin_fetch(0, 12);
        assert!(state.loading());

        assert!(state.apply_page(generation, artworks(1..13), 500));
        assert!(!state.loading());
        assert_eq!(state.rows().len(), 12);
        assert_eq!(state.total(), 500);
        assert_eq!(state.total_pages(), 42);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = CatalogState::new(12);
        let first = state.begin_fetch(0, 12);
        let second = state.begin_fetch(12, 12);

        // The page-1 response arrives after the user already moved to page 2.
        assert!(!state.apply_page(first, artworks(1..13), 500));
        assert!(state.rows().is_empty());
        assert!(state.loading());

        assert!(state.apply_page(second, artworks(13..25), 500));
        assert_eq!(state.rows()[0].id, 13);
        assert!(!state.loading());
    }

    #[test]
    fn test_fail_fetch_resets_loading_and_surfaces_error() {
        let mut state = CatalogState::new(12);
        let generation = state.begin_fetch(0, 12);

        assert!(state.fail_fetch(generation, "connection refused"));
        assert!(!state.loading());
        assert_eq!(state.error(), Some("connection refused"));

        // The next fetch clears the error.
        state.begin_fetch(0, 12);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut state = CatalogState::new(12);
        let first = state.begin_fetch(0, 12);
        let _second = state.begin_fetch(12, 12);

        assert!(!state.fail_fetch(first, "timeout"));
        assert!(state.error().is_none());
        assert!(state.loading());
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let mut state = CatalogState::new(12);
        let generation = state.begin_fetch(0, 12);
        state.apply_page(generation, artworks(1..13), 25);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn test_empty_catalog_has_one_page() {
        let state = CatalogState::new(12);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.page_number(), 1);
    }
}

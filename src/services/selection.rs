//! Cross-Page Auto-Selection
//!
//! Materializes the first N catalog rows in catalog order, seeded with the
//! rows already loaded for the current page and walking forward one page at
//! a time until the count is reached or the catalog ends.

use std::collections::HashSet;
use std::future::Future;

use crate::domain::artwork::{Artwork, ArtworkPage};
use crate::error::Result;

/// A source of catalog pages. Implemented by the HTTP client, and by
/// in-memory fakes in tests.
pub trait PageFetcher {
    /// Fetch one catalog page. Page numbering is 1-based.
    fn fetch_page(&self, page: u64, limit: u64)
        -> impl Future<Output = Result<ArtworkPage>> + Send;
}

/// Select the first `count` rows of the catalog, starting from the rows
/// already loaded for `current_page`.
///
/// When `count` fits inside the loaded rows no fetch is issued and the
/// prefix is returned as-is. Otherwise pages `current_page + 1` onward are
/// fetched strictly sequentially with the same `page_size`, each appended in
/// full, the last one truncated to the exact remainder. An empty page means
/// the catalog ended early and the result may be shorter than `count`.
/// Identifiers are deduplicated, since the server total can shift between
/// fetches. A fetch error aborts the whole sequence.
pub async fn select_first_n<F: PageFetcher>(
    fetcher: &F,
    loaded: &[Artwork],
    current_page: u64,
    page_size: u64,
    count: usize,
) -> Result<Vec<Artwork>> {
    if count <= loaded.len() {
        return Ok(loaded[..count].to_vec());
    }

    let mut selected: Vec<Artwork> = loaded.to_vec();
    let mut seen: HashSet<i64> = selected.iter().map(|a| a.id).collect();
    let mut next_page = current_page + 1;

    while selected.len() < count {
        let page = fetcher.fetch_page(next_page, page_size).await?;
        if page.data.is_empty() {
            // End of catalog; the selection stays shorter than requested.
            break;
        }
        for artwork in page.data {
            if selected.len() == count {
                break;
            }
            if seen.insert(artwork.id) {
                selected.push(artwork);
            }
        }
        next_page += 1;
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artwork::PageInfo;
    use crate::error::Error;
    use std::sync::Mutex;

    fn artworks(ids: std::ops::RangeInclusive<i64>) -> Vec<Artwork> {
        ids.map(|id| Artwork {
            id,
            ..Default::default()
        })
        .collect()
    }

    fn ids(artworks: &[Artwork]) -> Vec<i64> {
        artworks.iter().map(|a| a.id).collect()
    }

    /// Serves pre-baked pages keyed by 1-based page number and records the
    /// order of requests. Pages past the end are empty.
    struct FakeFetcher {
        pages: Vec<Vec<Artwork>>,
        requests: Mutex<Vec<u64>>,
        fail_on: Option<u64>,
    }

    impl FakeFetcher {
        fn new(pages: Vec<Vec<Artwork>>) -> Self {
            Self {
                pages,
                requests: Mutex::new(Vec::new()),
                fail_on: None,
            }
        }

        fn failing_on(mut self, page: u64) -> Self {
            self.fail_on = Some(page);
            self
        }

        fn requests(&self) -> Vec<u64> {
            self.requests.lock().expect("lock poisoned").clone()
        }
    }

    impl PageFetcher for FakeFetcher {
        async fn fetch_page(&self, page: u64, _limit: u64) -> Result<ArtworkPage> {
            self.requests.lock().expect("lock poisoned").push(page);
            if self.fail_on == Some(page) {
                return Err(Error::Invalid {
                    message: format!("injected failure on page {page}"),
                });
            }
            let data = self
                .pages
                .get(page as usize - 1)
                .cloned()
                .unwrap_or_default();
            Ok(ArtworkPage {
                data,
                pagination: PageInfo { total: 0 },
            })
        }
    }

    #[tokio::test]
    async fn test_count_within_loaded_rows_makes_no_fetch() {
        let fetcher = FakeFetcher::new(vec![artworks(1..=12)]);
        let loaded = artworks(1..=12);

        let selected = select_first_n(&fetcher, &loaded, 1, 12, 12)
            .await
            .expect("selection should succeed");

        assert_eq!(ids(&selected), (1..=12).collect::<Vec<_>>());
        assert!(fetcher.requests().is_empty());
    }

    #[tokio::test]
    async fn test_prefix_of_loaded_rows_preserves_order() {
        let fetcher = FakeFetcher::new(vec![]);
        let loaded = vec![
            Artwork {
                id: 30,
                ..Default::default()
            },
            Artwork {
                id: 10,
                ..Default::default()
            },
            Artwork {
                id: 20,
                ..Default::default()
            },
        ];

        let selected = select_first_n(&fetcher, &loaded, 1, 3, 2)
            .await
            .expect("selection should succeed");

        assert_eq!(ids(&selected), vec![30, 10]);
    }

    #[tokio::test]
    async fn test_spans_one_extra_page() {
        // pageSize=12, 12 rows loaded, request 20: one extra fetch, the
        // second page truncated to 8 rows.
        let fetcher = FakeFetcher::new(vec![artworks(1..=12), artworks(13..=24)]);
        let loaded = artworks(1..=12);

        let selected = select_first_n(&fetcher, &loaded, 1, 12, 20)
            .await
            .expect("selection should succeed");

        assert_eq!(ids(&selected), (1..=20).collect::<Vec<_>>());
        assert_eq!(fetcher.requests(), vec![2]);
    }

    #[tokio::test]
    async fn test_fetches_exactly_the_needed_pages_in_order() {
        // ceil((40 - 12) / 12) = 3 extra pages, requested sequentially.
        let fetcher = FakeFetcher::new(vec![
            artworks(1..=12),
            artworks(13..=24),
            artworks(25..=36),
            artworks(37..=48),
        ]);
        let loaded = artworks(1..=12);

        let selected = select_first_n(&fetcher, &loaded, 1, 12, 40)
            .await
            .expect("selection should succeed");

        assert_eq!(selected.len(), 40);
        assert_eq!(fetcher.requests(), vec![2, 3, 4]);
    }

    #[tokio::test]
    async fn test_starts_from_current_page_forward() {
        // Current page is 3: the walk continues at page 4, never before.
        let fetcher = FakeFetcher::new(vec![
            artworks(1..=12),
            artworks(13..=24),
            artworks(25..=36),
            artworks(37..=48),
        ]);
        let loaded = artworks(25..=36);

        let selected = select_first_n(&fetcher, &loaded, 3, 12, 15)
            .await
            .expect("selection should succeed");

        assert_eq!(ids(&selected), (25..=39).collect::<Vec<_>>());
        assert_eq!(fetcher.requests(), vec![4]);
    }

    #[tokio::test]
    async fn test_empty_page_terminates_with_short_selection() {
        let fetcher = FakeFetcher::new(vec![artworks(1..=12)]);
        let loaded = artworks(1..=12);

        let selected = select_first_n(&fetcher, &loaded, 1, 12, 20)
            .await
            .expect("selection should succeed");

        assert_eq!(selected.len(), 12);
        assert_eq!(fetcher.requests(), vec![2]);
    }

    #[tokio::test]
    async fn test_short_final_page_before_catalog_end() {
        let fetcher = FakeFetcher::new(vec![artworks(1..=12), artworks(13..=17)]);
        let loaded = artworks(1..=12);

        let selected = select_first_n(&fetcher, &loaded, 1, 12, 20)
            .await
            .expect("selection should succeed");

        assert_eq!(selected.len(), 17);
        assert_eq!(fetcher.requests(), vec![2, 3]);
    }

    #[tokio::test]
    async fn test_duplicate_identifiers_are_skipped() {
        // Page 2 starts with a repeat of the last loaded row, as happens
        // when the catalog shifts under the walk.
        let mut page_two = artworks(12..=23);
        page_two.extend(artworks(24..=24));
        let fetcher = FakeFetcher::new(vec![artworks(1..=12), page_two]);
        let loaded = artworks(1..=12);

        let selected = select_first_n(&fetcher, &loaded, 1, 12, 20)
            .await
            .expect("selection should succeed");

        assert_eq!(ids(&selected), (1..=20).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_fetch_error_aborts_the_sequence() {
        let fetcher = FakeFetcher::new(vec![
            artworks(1..=12),
            artworks(13..=24),
            artworks(25..=36),
        ])
        .failing_on(3);
        let loaded = artworks(1..=12);

        let result = select_first_n(&fetcher, &loaded, 1, 12, 30).await;

        assert!(result.is_err());
        assert_eq!(fetcher.requests(), vec![2, 3]);
    }
}

//! Artwork - Catalog Record Data

use serde::{Deserialize, Serialize};

/// A single artwork record as returned by the catalog API.
///
/// Records are immutable snapshots: the UI redisplays them verbatim and
/// replaces the whole set whenever a page is fetched. Identity is the `id`
/// field, which is unique and stable across the catalog.
///
/// The live API returns `null` for most descriptive fields on a fair share
/// of records, so everything except `id` is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artwork {
    /// Unique, stable record identifier
    pub id: i64,
    /// Artwork title
    #[serde(default)]
    pub title: Option<String>,
    /// Place of origin
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Artist display string (name, nationality, dates)
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Inscriptions text
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Start year
    #[serde(default)]
    pub date_start: Option<i32>,
    /// End year
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Title for display, falling back for untitled records
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }
}

/// One page of the catalog, in wire shape:
/// `GET {base}/artworks?page={p}&limit={n}` (1-based page numbering).
#[derive(Debug, Clone, Deserialize)]
pub struct ArtworkPage {
    /// Records for this page, in catalog order
    pub data: Vec<Artwork>,
    /// Pagination metadata
    pub pagination: PageInfo,
}

/// Pagination metadata block of a catalog response
#[derive(Debug, Clone, Deserialize)]
pub struct PageInfo {
    /// Authoritative total record count across the whole catalog
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_page_with_null_fields() {
        let body = r#"{
            "pagination": { "total": 129612, "limit": 2, "current_page": 1 },
            "data": [
                {
                    "id": 27992,
                    "title": "A Sunday on La Grande Jatte",
                    "place_of_origin": "France",
                    "artist_display": "Georges Seurat\nFrench, 1859-1891",
                    "inscriptions": null,
                    "date_start": 1884,
                    "date_end": 1886
                },
                {
                    "id": 129884,
                    "title": null,
                    "place_of_origin": null,
                    "artist_display": null,
                    "inscriptions": null,
                    "date_start": null,
                    "date_end": null
                }
            ]
        }"#;

        let page: ArtworkPage = serde_json::from_str(body).expect("page should decode");
        assert_eq!(page.pagination.total, 129612);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].id, 27992);
        assert_eq!(page.data[0].date_start, Some(1884));
        assert_eq!(page.data[1].display_title(), "Untitled");
        assert_eq!(page.data[1].date_end, None);
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let body = r#"{
            "pagination": { "total": 1, "total_pages": 1 },
            "data": [ { "id": 5, "title": "Test", "api_model": "artworks" } ]
        }"#;

        let page: ArtworkPage = serde_json::from_str(body).expect("page should decode");
        assert_eq!(page.data[0].id, 5);
    }
}

//! Catalog API Client
//!
//! Thin reqwest wrapper over the read-only artworks endpoint.

use std::time::Duration;

use crate::domain::artwork::ArtworkPage;
use crate::domain::config::ApiConfig;
use crate::error::Result;
use crate::services::selection::PageFetcher;

/// HTTP client for the catalog API
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one catalog page. Page numbering is 1-based.
    pub async fn fetch_page(&self, page: u64, limit: u64) -> Result<ArtworkPage> {
        let url = format!("{}/artworks", self.base_url);
        tracing::debug!(%url, page, limit, "fetching catalog page");

        let response = self
            .http
            .get(&url)
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<ArtworkPage>().await?)
    }
}

impl PageFetcher for CatalogClient {
    async fn fetch_page(&self, page: u64, limit: u64) -> Result<ArtworkPage> {
        CatalogClient::fetch_page(self, page, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = CatalogClient::new(&ApiConfig {
            base_url: "https://api.artic.edu/api/v1/".to_string(),
            timeout_secs: 5,
        })
        .expect("client should build");

        assert_eq!(client.base_url, "https://api.artic.edu/api/v1");
    }
}

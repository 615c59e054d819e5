//! Config - Application Configuration

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Catalog API settings
    pub api: ApiConfig,
    /// Table display settings
    pub table: TableConfig,
}

/// Catalog API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the catalog API
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.artic.edu/api/v1".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Table display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Rows per page
    pub page_size: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { page_size: 12 }
    }
}

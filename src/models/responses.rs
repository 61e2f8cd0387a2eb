//! Response DTOs for the catalog API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::CacheStats;
use crate::catalog::Product;

/// One product as served by `GET /api/products` and `GET /api/products/:id`.
///
/// Carries the product fields plus the display values pages need.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    #[serde(flatten)]
    pub product: Product,
    /// Image URL or the placeholder
    pub image_src: String,
    /// Price ready for display, e.g. `₺15.00`
    pub formatted_price: String,
    /// Path of the detail page
    pub detail_path: String,
}

impl ProductResponse {
    /// Builds the response, substituting `placeholder` for unusable image URLs.
    pub fn from_product(product: &Product, placeholder: &str) -> Self {
        Self {
            image_src: product.image_src(placeholder).to_string(),
            formatted_price: product.formatted_price(),
            detail_path: product.detail_path(),
            product: product.clone(),
        }
    }
}

/// Response body for `GET /api/filters`
#[derive(Debug, Clone, Serialize)]
pub struct FiltersResponse {
    /// Distinct product types, sorted
    pub types: BTreeSet<String>,
    /// Distinct product categories, sorted
    pub categories: BTreeSet<String>,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Reads served from the current snapshot
    pub hits: u64,
    /// Successful fetches
    pub refreshes: u64,
    /// Failed fetches
    pub failed_refreshes: u64,
    /// Products in the current snapshot
    pub total_products: usize,
    /// hits / all reads
    pub hit_rate: f64,
    /// Fetch time of the current snapshot
    pub last_refreshed_at: Option<DateTime<Utc>>,
    /// Snapshot validity window in seconds
    pub window_secs: i64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: CacheStats, window_secs: i64) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            refreshes: stats.refreshes,
            failed_refreshes: stats.failed_refreshes,
            total_products: stats.total_products,
            last_refreshed_at: stats.last_refreshed_at,
            window_secs,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

//! Cache Statistics Module
//!
//! Tracks how often the catalog was served from memory versus refetched.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Cache Stats ==
/// Freshness cache counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Reads answered from the current snapshot
    pub hits: u64,
    /// Successful fetches from the repository
    pub refreshes: u64,
    /// Fetches that returned an error
    pub failed_refreshes: u64,
    /// Products in the current snapshot
    pub total_products: usize,
    /// Fetch time of the current snapshot
    pub last_refreshed_at: Option<DateTime<Utc>>,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Share of reads served without fetching.
    ///
    /// Returns hits / (hits + refreshes + failed_refreshes), or 0.0 before any read.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.refreshes + self.failed_refreshes;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Refresh ==
    /// Counts a successful fetch and remembers the new snapshot's shape.
    pub fn record_refresh(&mut self, total_products: usize, refreshed_at: DateTime<Utc>) {
        self.refreshes += 1;
        self.total_products = total_products;
        self.last_refreshed_at = Some(refreshed_at);
    }

    pub fn record_failed_refresh(&mut self) {
        self.failed_refreshes += 1;
    }
}

//! Freshness Cache Module
//!
//! Time-windowed memoization of the product repository.

use std::sync::Arc;

use chrono::TimeDelta;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, Clock, ProductSnapshot};
use crate::catalog::{query, Product};
use crate::error::Result;
use crate::sheets::ProductRepository;

// == Freshness Cache ==
/// Serves the product list from memory while the last snapshot is within the
/// validity window and refetches it otherwise.
///
/// Refreshes are single-flight: callers that find the snapshot stale queue on
/// a gate and re-check after acquiring it, so one expiry costs one fetch.
/// A failed refresh leaves the previous state untouched and returns the error;
/// stale data is never served as a fallback.
pub struct FreshnessCache {
    repository: Arc<dyn ProductRepository>,
    clock: Arc<dyn Clock>,
    window: TimeDelta,
    /// Current snapshot, absent until the first successful fetch
    snapshot: RwLock<Option<ProductSnapshot>>,
    refresh_gate: Mutex<()>,
    stats: Mutex<CacheStats>,
}

impl FreshnessCache {
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// * `repository` - Source of fresh product lists
    /// * `clock` - Time source for staleness checks
    /// * `window` - How long a snapshot stays valid
    pub fn new(
        repository: Arc<dyn ProductRepository>,
        clock: Arc<dyn Clock>,
        window: TimeDelta,
    ) -> Self {
        Self {
            repository,
            clock,
            window,
            snapshot: RwLock::new(None),
            refresh_gate: Mutex::new(()),
            stats: Mutex::new(CacheStats::new()),
        }
    }

    // == Get Products ==
    /// Returns the current product list, fetching it first when there is no
    /// snapshot or the snapshot is stale.
    pub async fn get_products(&self) -> Result<Arc<Vec<Product>>> {
        if let Some(products) = self.fresh_products().await {
            self.stats.lock().await.record_hit();
            return Ok(products);
        }

        let _gate = self.refresh_gate.lock().await;

        // Another caller may have refreshed while this one waited.
        if let Some(products) = self.fresh_products().await {
            self.stats.lock().await.record_hit();
            return Ok(products);
        }

        let started = self.clock.now();
        debug!("product snapshot missing or stale, fetching");

        match self.repository.fetch_all().await {
            Ok(products) => {
                let snapshot = ProductSnapshot::new(products, started);
                let products = snapshot.products();
                *self.snapshot.write().await = Some(snapshot);

                self.stats
                    .lock()
                    .await
                    .record_refresh(products.len(), started);
                info!(products = products.len(), "product snapshot refreshed");
                Ok(products)
            }
            Err(err) => {
                self.stats.lock().await.record_failed_refresh();
                warn!(error = %err, "product refresh failed");
                Err(err)
            }
        }
    }

    // == Get Product By Id ==
    /// Looks a product up in the current product list.
    pub async fn get_product_by_id(&self, id: &str) -> Result<Option<Product>> {
        let products = self.get_products().await?;
        Ok(query::find_by_id(&products, id).cloned())
    }

    // == Reset ==
    /// Drops the snapshot and zeroes the statistics; the next read fetches.
    pub async fn reset(&self) {
        *self.snapshot.write().await = None;
        *self.stats.lock().await = CacheStats::new();
    }

    // == Stats ==
    /// Returns a copy of the current statistics.
    pub async fn stats(&self) -> CacheStats {
        self.stats.lock().await.clone()
    }

    /// Validity window this cache was built with.
    pub fn window(&self) -> TimeDelta {
        self.window
    }

    async fn fresh_products(&self) -> Option<Arc<Vec<Product>>> {
        let now = self.clock.now();
        let guard = self.snapshot.read().await;
        let products = guard
            .as_ref()
            .filter(|snapshot| !snapshot.is_stale(now, self.window))
            .map(ProductSnapshot::products);
        products
    }
}

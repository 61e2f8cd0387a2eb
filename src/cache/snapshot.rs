//! Product Snapshot Module
//!
//! One successful fetch of the product list, stamped with its fetch time.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};

use crate::catalog::Product;

// == Product Snapshot ==
/// Immutable product list plus the time it was fetched.
///
/// Replaced wholesale on refresh; callers hold the shared list, never a
/// reference into the cache.
#[derive(Debug, Clone)]
pub struct ProductSnapshot {
    /// Products in sheet order
    products: Arc<Vec<Product>>,
    /// When the fetch that produced this snapshot started
    pub fetched_at: DateTime<Utc>,
}

impl ProductSnapshot {
    // == Constructor ==
    pub fn new(products: Vec<Product>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            products: Arc::new(products),
            fetched_at,
        }
    }

    /// Shared handle to the product list.
    pub fn products(&self) -> Arc<Vec<Product>> {
        Arc::clone(&self.products)
    }

    /// Time elapsed since the fetch.
    pub fn age(&self, now: DateTime<Utc>) -> TimeDelta {
        now - self.fetched_at
    }

    // == Is Stale ==
    /// A snapshot is stale once its age strictly exceeds the validity window.
    /// At exactly `window` it is still served.
    pub fn is_stale(&self, now: DateTime<Utc>, window: TimeDelta) -> bool {
        self.age(now) > window
    }
}

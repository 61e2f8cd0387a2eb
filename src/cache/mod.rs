//! Cache Module
//!
//! Time-windowed in-memory cache in front of the product repository.

mod clock;
mod freshness;
mod snapshot;
mod stats;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use freshness::FreshnessCache;
pub use snapshot::ProductSnapshot;
pub use stats::CacheStats;

// == Public Constants ==
/// Default snapshot validity window in seconds (5 minutes)
pub const DEFAULT_TTL_SECS: u64 = 300;

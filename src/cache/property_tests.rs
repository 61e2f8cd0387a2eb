//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check that the freshness cache fetches exactly when a
//! simple model of the validity window says it should.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::TimeDelta;
use proptest::prelude::*;

use crate::cache::{FreshnessCache, ManualClock};
use crate::catalog::Product;
use crate::error::Result;
use crate::sheets::ProductRepository;

// == Test Configuration ==
const TEST_WINDOW_SECS: i64 = 300;

#[derive(Debug, Default)]
struct CountingRepository {
    fetches: AtomicUsize,
}

#[async_trait]
impl ProductRepository for CountingRepository {
    async fn fetch_all(&self) -> Result<Vec<Product>> {
        let attempt = self.fetches.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(vec![Product {
            id: format!("p{attempt}"),
            name: format!("Fetch {attempt}"),
            price_cents: attempt as u64,
            currency: "TRY".to_string(),
            product_type: String::new(),
            category: String::new(),
            description: String::new(),
            image_url: None,
            in_stock: true,
        }])
    }
}

/// Seconds to advance the clock before each read.
fn steps_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(
        prop_oneof![
            3 => 0i64..60,
            1 => Just(TEST_WINDOW_SECS),
            1 => Just(TEST_WINDOW_SECS + 1),
            1 => 0i64..1_000,
        ],
        1..40,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of reads, a fetch happens on the first read and on
    // every read whose snapshot age strictly exceeds the window; all other
    // reads return the last fetched list.
    #[test]
    fn prop_fetches_match_window_model(steps in steps_strategy()) {
        let repository = Arc::new(CountingRepository::default());
        let clock = Arc::new(ManualClock::default());
        let cache = FreshnessCache::new(
            repository.clone(),
            clock.clone(),
            TimeDelta::seconds(TEST_WINDOW_SECS),
        );

        let mut expected_fetches = 0usize;
        let mut age: Option<i64> = None;

        for step in steps {
            clock.advance(TimeDelta::seconds(step));
            age = age.map(|a| a + step);

            let stale = age.map_or(true, |a| a > TEST_WINDOW_SECS);
            if stale {
                expected_fetches += 1;
                age = Some(0);
            }

            let products = tokio_test::block_on(cache.get_products()).unwrap();
            prop_assert_eq!(repository.fetches.load(Ordering::SeqCst), expected_fetches);
            prop_assert_eq!(&products[0].id, &format!("p{expected_fetches}"));
        }

        let stats = tokio_test::block_on(cache.stats());
        prop_assert_eq!(stats.refreshes as usize, expected_fetches);
    }
}

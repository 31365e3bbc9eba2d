//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check capacity and eviction behavior over arbitrary
//! sequences of puts and lookups.

use proptest::prelude::*;
use std::collections::VecDeque;
use std::time::Duration;

use crate::cache::WeatherCache;
use crate::models::record::sample_record;

// == Test Configuration ==
const TEST_CAPACITY: usize = 10;
const TEST_TTL: Duration = Duration::from_secs(600);

// == Strategies ==
/// City names drawn from a small alphabet so sequences revisit keys
fn city_strategy() -> impl Strategy<Value = String> {
    "[A-F][a-c]{0,2}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { city: String, temp: i16 },
    Lookup { city: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (city_strategy(), any::<i16>()).prop_map(|(city, temp)| CacheOp::Put { city, temp }),
        city_strategy().prop_map(|city| CacheOp::Lookup { city }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // The number of cached cities never exceeds capacity.
    #[test]
    fn prop_capacity_never_exceeded(
        capacity in 1usize..12,
        ops in prop::collection::vec(cache_op_strategy(), 1..200)
    ) {
        let mut cache = WeatherCache::new(capacity, TEST_TTL);

        for op in ops {
            match op {
                CacheOp::Put { city, temp } => {
                    cache.put(&city, sample_record(&city, f64::from(temp), 0));
                }
                CacheOp::Lookup { city } => {
                    let _ = cache.lookup(&city);
                }
            }
            prop_assert!(
                cache.len() <= capacity,
                "Cache size {} exceeds capacity {}",
                cache.len(),
                capacity
            );
        }
    }

    // Evictions follow first-insertion order, matching a reference FIFO model.
    #[test]
    fn prop_fifo_matches_model(
        ops in prop::collection::vec(cache_op_strategy(), 1..200)
    ) {
        let mut cache = WeatherCache::new(TEST_CAPACITY, TEST_TTL);
        let mut model: VecDeque<String> = VecDeque::new();

        for op in ops {
            match op {
                CacheOp::Put { city, temp } => {
                    let expected_evicted = if !model.contains(&city) && model.len() >= TEST_CAPACITY {
                        model.pop_front()
                    } else {
                        None
                    };
                    if !model.contains(&city) {
                        model.push_back(city.clone());
                    }

                    let evicted = cache.put(&city, sample_record(&city, f64::from(temp), 0));
                    prop_assert_eq!(evicted, expected_evicted);
                }
                CacheOp::Lookup { city } => {
                    prop_assert_eq!(cache.lookup(&city).is_some(), model.contains(&city));
                }
            }
        }

        prop_assert_eq!(cache.cities(), model.into_iter().collect::<Vec<_>>());
    }

    // A fresh put is returned unchanged by the next lookup.
    #[test]
    fn prop_put_then_lookup(city in city_strategy(), temp in any::<i16>(), dt in any::<i64>()) {
        let mut cache = WeatherCache::new(TEST_CAPACITY, TEST_TTL);
        let record = sample_record(&city, f64::from(temp), dt);

        cache.put(&city, record.clone());

        prop_assert_eq!(cache.lookup(&city), Some(record));
    }

    // Overwriting an existing city never evicts, even at capacity.
    #[test]
    fn prop_overwrite_never_evicts(
        cities in prop::collection::hash_set(city_strategy(), TEST_CAPACITY..=TEST_CAPACITY),
        pick in any::<prop::sample::Index>()
    ) {
        let cities: Vec<String> = cities.into_iter().collect();
        let mut cache = WeatherCache::new(TEST_CAPACITY, TEST_TTL);
        for city in &cities {
            cache.put(city, sample_record(city, 0.0, 0));
        }

        let target = pick.get(&cities);
        let evicted = cache.put(target, sample_record(target, 1.0, 1));

        prop_assert_eq!(evicted, None);
        prop_assert_eq!(cache.len(), TEST_CAPACITY);
        prop_assert_eq!(cache.stats().evictions, 0);
    }
}

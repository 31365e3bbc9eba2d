//! Weather Cache Module
//!
//! City-keyed cache combining HashMap storage with insertion-order tracking
//! and lazy TTL expiry.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, InsertionOrder};
use crate::models::WeatherRecord;

// == Weather Cache ==
/// Bounded mapping from city name (exact, case-sensitive) to cache entry.
///
/// Not synchronized; owners wrap it in a lock.
#[derive(Debug)]
pub struct WeatherCache {
    entries: HashMap<String, CacheEntry>,
    order: InsertionOrder,
    stats: CacheStats,
    capacity: usize,
    ttl: Duration,
}

impl WeatherCache {
    // == Constructor ==
    /// Creates a cache holding at most `capacity` cities (at least one).
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            order: InsertionOrder::new(),
            stats: CacheStats::with_capacity(capacity),
            capacity,
            ttl,
        }
    }

    // == Lookup ==
    /// Returns the cached record if present and not expired.
    ///
    /// Stale entries are left in place: the refresher still sees them and
    /// the next `put` for the city replaces them.
    pub fn lookup(&mut self, city: &str) -> Option<WeatherRecord> {
        match self.entries.get(city) {
            Some(entry) if !entry.is_expired() => {
                self.stats.record_hit();
                Some(entry.record.clone())
            }
            Some(_) => {
                self.stats.record_expired();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Inserts or overwrites the entry for `city` with a fresh timestamp.
    ///
    /// A new city arriving at capacity evicts exactly one entry: the one
    /// inserted earliest, regardless of freshness. Overwrites keep their
    /// original insertion position and never evict. Returns the evicted
    /// city, if any.
    pub fn put(&mut self, city: &str, record: WeatherRecord) -> Option<String> {
        let entry = CacheEntry::new(record, self.ttl);

        if let Some(existing) = self.entries.get_mut(city) {
            *existing = entry;
            return None;
        }

        let mut evicted = None;
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.evict_oldest() {
                self.entries.remove(&oldest);
                self.stats.record_eviction();
                debug!(city = %oldest, "Evicted oldest cache entry");
                evicted = Some(oldest);
            }
        }

        self.entries.insert(city.to_string(), entry);
        self.order.record(city);
        self.stats.set_total_entries(self.entries.len());

        evicted
    }

    // == Cities ==
    /// Snapshot of cached city names, earliest inserted first.
    pub fn cities(&self) -> Vec<String> {
        self.order.iter().cloned().collect()
    }

    /// Returns the entry for `city` without touching statistics or expiry.
    pub fn entry(&self, city: &str) -> Option<&CacheEntry> {
        self.entries.get(city)
    }

    /// Returns true if `city` has an entry, fresh or expired.
    pub fn contains(&self, city: &str) -> bool {
        self.entries.contains_key(city)
    }

    // == Stats ==
    /// Returns the counters with the current entry count filled in.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Accessors ==
    /// Maximum number of cached cities.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lifetime of each entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of cached cities, including expired ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

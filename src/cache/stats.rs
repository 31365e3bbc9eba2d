//! Cache Statistics Module
//!
//! Counts lookups, expiry misses and evictions for one instance's cache.

use serde::Serialize;

// == Cache Stats ==
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups answered from a fresh entry
    pub hits: u64,
    /// Lookups that required a fetch (absent or expired)
    pub misses: u64,
    /// Subset of `misses` where an entry was present but expired
    pub expired: u64,
    /// Entries dropped to make room for a new city
    pub evictions: u64,
    /// Current number of cached cities
    pub total_entries: usize,
    /// Maximum number of cached cities
    pub capacity: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates empty counters for a cache of the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Recording ==
    /// Records a lookup served from a fresh entry.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Records a lookup for an absent city.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Records a miss caused by a stale entry.
    pub fn record_expired(&mut self) {
        self.misses += 1;
        self.expired += 1;
    }

    /// Records one city dropped to make room.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Updates the current entry count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_with_capacity() {
        let stats = CacheStats::with_capacity(10);
        assert_eq!(stats.capacity, 10);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_expired_counts_as_miss() {
        let mut stats = CacheStats::default();
        stats.record_miss();
        stats.record_expired();

        assert_eq!(stats.misses, 2);
        assert_eq!(stats.expired, 1);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::default();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_expired();
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_stats_serialize() {
        let mut stats = CacheStats::with_capacity(10);
        stats.record_eviction();
        stats.set_total_entries(10);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["evictions"], 1);
        assert_eq!(json["total_entries"], 10);
        assert_eq!(json["capacity"], 10);
    }
}

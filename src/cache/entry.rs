//! Cache Entry Module
//!
//! Wraps one fetched weather record with its creation instant.

use std::time::Duration;

use tokio::time::Instant;

use crate::models::WeatherRecord;

// == Cache Entry ==
/// A cached weather record plus the instant it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored record
    pub record: WeatherRecord,
    /// When the entry was created (reset on every put)
    pub created_at: Instant,
    /// Lifetime of the entry
    pub ttl: Duration,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(record: WeatherRecord, ttl: Duration) -> Self {
        Self {
            record,
            created_at: Instant::now(),
            ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Expiry is recomputed on every call: an entry is expired once strictly
    /// more than `ttl` has elapsed since creation.
    pub fn is_expired(&self) -> bool {
        self.age() > self.ttl
    }

    /// Time since the entry was stored.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, `Duration::ZERO` once elapsed.
    pub fn ttl_remaining(&self) -> Duration {
        self.ttl.saturating_sub(self.age())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::sample_record;

    const TTL: Duration = Duration::from_secs(600);

    #[tokio::test(start_paused = true)]
    async fn test_entry_fresh_on_creation() {
        let entry = CacheEntry::new(sample_record("Oslo", 3.0, 1), TTL);

        assert!(!entry.is_expired());
        assert_eq!(entry.record.name, "Oslo");
        assert_eq!(entry.ttl_remaining(), TTL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expiration() {
        let entry = CacheEntry::new(sample_record("Oslo", 3.0, 1), TTL);

        tokio::time::advance(TTL + Duration::from_secs(1)).await;

        assert!(entry.is_expired());
        assert_eq!(entry.ttl_remaining(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new(sample_record("Oslo", 3.0, 1), TTL);

        // Exactly TTL old is still fresh; expiry needs strictly more
        tokio::time::advance(TTL).await;
        assert!(!entry.is_expired(), "Entry should be fresh at the boundary");

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(entry.is_expired(), "Entry should expire just past the boundary");
    }

    #[tokio::test(start_paused = true)]
    async fn test_ttl_remaining_counts_down() {
        let entry = CacheEntry::new(sample_record("Oslo", 3.0, 1), TTL);

        tokio::time::advance(Duration::from_secs(100)).await;

        assert_eq!(entry.age(), Duration::from_secs(100));
        assert_eq!(entry.ttl_remaining(), Duration::from_secs(500));
    }
}

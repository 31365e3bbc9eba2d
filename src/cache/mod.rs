//! Cache Module
//!
//! Bounded per-instance weather cache with lazy TTL expiry and
//! oldest-insertion (FIFO) eviction.

mod entry;
mod order;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use order::InsertionOrder;
pub use stats::CacheStats;
pub use store::WeatherCache;

// == Public Constants ==
/// Default number of cities kept per instance
pub const DEFAULT_CAPACITY: usize = 10;

/// Default entry lifetime (10 minutes)
pub const DEFAULT_TTL_SECS: u64 = 600;

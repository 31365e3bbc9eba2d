//! Configuration Module
//!
//! Handles loading and managing SDK configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::{DEFAULT_CAPACITY, DEFAULT_TTL_SECS};
use crate::tasks::{DEFAULT_POLL_INTERVAL_SECS, MIN_POLL_INTERVAL};

/// Default upstream endpoint for current weather.
pub const DEFAULT_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// SDK configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Current-weather endpoint of the upstream API
    pub api_url: String,
    /// Optional `units` query parameter (e.g. "metric"); omitted when None
    pub units: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout: u64,
    /// Maximum number of cities each instance caches
    pub max_entries: usize,
    /// Cache entry lifetime in seconds
    pub cache_ttl: u64,
    /// Background refresh period in seconds (polling mode)
    pub poll_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `WEATHER_API_URL` - Upstream endpoint (default: OpenWeather current weather)
    /// - `WEATHER_UNITS` - Units passed upstream (default: unset)
    /// - `REQUEST_TIMEOUT` - Request timeout in seconds (default: 30)
    /// - `MAX_ENTRIES` - Cached cities per instance (default: 10)
    /// - `CACHE_TTL` - Entry lifetime in seconds (default: 600)
    /// - `POLL_INTERVAL` - Refresh period in seconds (default: 600)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_url: env::var("WEATHER_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.api_url),
            units: env::var("WEATHER_UNITS")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            request_timeout: parse_env("REQUEST_TIMEOUT").unwrap_or(defaults.request_timeout),
            max_entries: parse_env("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            cache_ttl: parse_env("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            poll_interval: parse_env("POLL_INTERVAL").unwrap_or(defaults.poll_interval),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Refresh period, never shorter than one second.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval).max(MIN_POLL_INTERVAL)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            units: None,
            request_timeout: 30,
            max_entries: DEFAULT_CAPACITY,
            cache_ttl: DEFAULT_TTL_SECS,
            poll_interval: DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

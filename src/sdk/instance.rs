//! SDK instance
//!
//! One instance per credential: owns the city cache and, in polling mode,
//! the background refresher that keeps it warm.

use std::fmt;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument};

use crate::cache::{CacheStats, WeatherCache};
use crate::config::Config;
use crate::error::{Result, SdkError};
use crate::fetcher::WeatherFetcher;
use crate::models::WeatherRecord;
use crate::sdk::Mode;
use crate::tasks::{Refresher, RefresherState};

/// Weather client bound to a single API credential.
///
/// Obtained from [`crate::InstanceRegistry::add_instance`]. Cache reads and
/// writes from the foreground path and from the refresher go through one
/// lock per instance; the lock is never held across a network call.
pub struct WeatherSdk {
    credential: String,
    mode: Mode,
    cache: Arc<RwLock<WeatherCache>>,
    fetcher: Arc<dyn WeatherFetcher>,
    refresher: Mutex<Option<Refresher>>,
}

impl WeatherSdk {
    /// Builds an instance, starting its refresher when `mode` is polling.
    ///
    /// Must be called from within a tokio runtime.
    pub(crate) fn new(
        credential: String,
        mode: Mode,
        config: &Config,
        fetcher: Arc<dyn WeatherFetcher>,
    ) -> Self {
        let cache = Arc::new(RwLock::new(WeatherCache::new(
            config.max_entries,
            config.cache_ttl(),
        )));

        let refresher = match mode {
            Mode::Polling => Some(Refresher::spawn(
                Arc::clone(&cache),
                Arc::clone(&fetcher),
                credential.clone(),
                config.poll_interval(),
            )),
            Mode::OnDemand => None,
        };

        Self {
            credential,
            mode,
            cache,
            fetcher,
            refresher: Mutex::new(refresher),
        }
    }

    // == Get Weather ==
    /// Returns current weather for `city`.
    ///
    /// A fresh cached record is returned without any network call. Otherwise
    /// the fetcher is called once; on success the record is cached and
    /// returned, on failure the cache is left untouched.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub async fn get_weather(&self, city: &str) -> Result<WeatherRecord> {
        if city.trim().is_empty() {
            return Err(SdkError::InvalidCity(city.to_string()));
        }

        let cached = self.cache.write().await.lookup(city);
        if let Some(record) = cached {
            debug!("Cache hit");
            return Ok(record);
        }

        debug!("Cache miss, fetching");
        let record = self
            .fetcher
            .fetch(city, &self.credential)
            .await
            .map_err(|source| SdkError::WeatherRetrieval {
                city: city.to_string(),
                source,
            })?;

        self.cache.write().await.put(city, record.clone());
        Ok(record)
    }

    /// Same as [`get_weather`](Self::get_weather), serialized to JSON.
    pub async fn get_weather_as_json(&self, city: &str) -> Result<String> {
        let record = self.get_weather(city).await?;
        Ok(serde_json::to_string(&record)?)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub async fn stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    /// Cached city names, earliest inserted first.
    pub async fn cached_cities(&self) -> Vec<String> {
        self.cache.read().await.cities()
    }

    /// True while the background refresher is running.
    pub async fn is_polling(&self) -> bool {
        self.refresher
            .lock()
            .await
            .as_ref()
            .is_some_and(|r| r.state() == RefresherState::Running)
    }

    /// Stops the refresher, if any, and waits for it to exit. Idempotent.
    pub(crate) async fn shutdown(&self) {
        let refresher = self.refresher.lock().await.take();
        if let Some(refresher) = refresher {
            refresher.stop().await;
            info!(credential = %mask(&self.credential), "Polling stopped");
        }
    }
}

impl fmt::Debug for WeatherSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherSdk")
            .field("credential", &mask(&self.credential))
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

/// Keeps the last four characters of a credential for log correlation.
pub(crate) fn mask(credential: &str) -> String {
    let count = credential.chars().count();
    if count <= 4 {
        return "****".to_string();
    }
    let tail: String = credential.chars().skip(count - 4).collect();
    format!("****{tail}")
}

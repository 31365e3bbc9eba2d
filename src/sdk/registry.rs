//! Instance Registry
//!
//! Maps API credentials to SDK instances, allowing at most one instance per
//! credential. The registry is an ordinary value: construct one and share it
//! (e.g. behind an `Arc`) wherever instances are managed.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::config::Config;
use crate::error::{Result, SdkError};
use crate::fetcher::{OpenWeatherFetcher, WeatherFetcher};
use crate::sdk::mask;
use crate::sdk::{Mode, WeatherSdk};

#[derive(Debug)]
pub struct InstanceRegistry {
    config: Config,
    fetcher: Arc<dyn WeatherFetcher>,
    /// Held for the whole of every add/remove/clear, including the wait for a
    /// refresher to stop, so registry mutations never interleave.
    instances: Mutex<HashMap<String, Arc<WeatherSdk>>>,
}

impl InstanceRegistry {
    /// Creates a registry whose instances fetch from the configured upstream.
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = OpenWeatherFetcher::new(&config).map_err(SdkError::Client)?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    /// Creates a registry whose instances share the given fetcher.
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn WeatherFetcher>) -> Self {
        Self {
            config,
            fetcher,
            instances: Mutex::new(HashMap::new()),
        }
    }

    // == Add Instance ==
    /// Creates and registers an instance for `credential`.
    ///
    /// Fails with [`SdkError::DuplicateInstance`] if one already exists; the
    /// existing instance is left untouched. In polling mode the new
    /// instance's refresher starts immediately.
    pub async fn add_instance(
        &self,
        credential: impl Into<String>,
        mode: Mode,
    ) -> Result<Arc<WeatherSdk>> {
        let credential = credential.into();
        let mut instances = self.instances.lock().await;

        if instances.contains_key(&credential) {
            return Err(SdkError::DuplicateInstance(credential));
        }

        let sdk = Arc::new(WeatherSdk::new(
            credential.clone(),
            mode,
            &self.config,
            Arc::clone(&self.fetcher),
        ));
        info!(credential = %mask(&credential), %mode, "Instance added");
        instances.insert(credential, Arc::clone(&sdk));

        Ok(sdk)
    }

    // == Remove Instance ==
    /// Unregisters the instance for `credential` and stops its refresher.
    ///
    /// Does not return until the refresher task has exited. Fails with
    /// [`SdkError::InstanceNotFound`] (and changes nothing) if the credential
    /// is unknown.
    pub async fn remove_instance(&self, credential: &str) -> Result<()> {
        let mut instances = self.instances.lock().await;

        let sdk = instances
            .remove(credential)
            .ok_or_else(|| SdkError::InstanceNotFound(credential.to_string()))?;
        sdk.shutdown().await;
        info!(credential = %mask(credential), "Instance removed");

        Ok(())
    }

    /// Returns the instance registered for `credential`, if any.
    pub async fn get(&self, credential: &str) -> Option<Arc<WeatherSdk>> {
        self.instances.lock().await.get(credential).cloned()
    }

    pub async fn contains(&self, credential: &str) -> bool {
        self.instances.lock().await.contains_key(credential)
    }

    pub async fn len(&self) -> usize {
        self.instances.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.instances.lock().await.is_empty()
    }

    /// Removes every instance, stopping all refreshers.
    pub async fn clear(&self) {
        let mut instances = self.instances.lock().await;
        for (_, sdk) in instances.drain() {
            sdk.shutdown().await;
        }
        info!("Registry cleared");
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

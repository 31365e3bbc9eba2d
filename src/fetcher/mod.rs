//! Weather Fetcher Module
//!
//! The network capability the SDK core calls on a cache miss and during
//! background refresh.

mod openweather;

#[cfg(test)]
pub(crate) mod mock;

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::WeatherRecord;

pub use openweather::OpenWeatherFetcher;

/// Performs one round trip for `city` and returns the current weather.
#[async_trait]
pub trait WeatherFetcher: Send + Sync + Debug {
    async fn fetch(&self, city: &str, credential: &str) -> Result<WeatherRecord, FetchError>;
}

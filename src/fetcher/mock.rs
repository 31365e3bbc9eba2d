//! In-memory fetcher for network-free tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::record::sample_record;
use crate::models::WeatherRecord;

use super::WeatherFetcher;

/// Serves canned per-city responses and counts every call.
#[derive(Debug, Default)]
pub(crate) struct MockFetcher {
    responses: Mutex<HashMap<String, Result<WeatherRecord, FetchError>>>,
    calls: AtomicUsize,
    city_calls: Mutex<HashMap<String, usize>>,
}

impl MockFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Serves a sample record for `city` with the given temperature and observation time.
    pub(crate) fn respond(&self, city: &str, temp: f64, datetime: i64) {
        self.set(city, Ok(sample_record(city, temp, datetime)));
    }

    pub(crate) fn fail(&self, city: &str, error: FetchError) {
        self.set(city, Err(error));
    }

    fn set(&self, city: &str, response: Result<WeatherRecord, FetchError>) {
        self.responses
            .lock()
            .unwrap()
            .insert(city.to_string(), response);
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn calls_for(&self, city: &str) -> usize {
        self.city_calls
            .lock()
            .unwrap()
            .get(city)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl WeatherFetcher for MockFetcher {
    async fn fetch(&self, city: &str, _credential: &str) -> Result<WeatherRecord, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .city_calls
            .lock()
            .unwrap()
            .entry(city.to_string())
            .or_default() += 1;

        self.responses
            .lock()
            .unwrap()
            .get(city)
            .cloned()
            .unwrap_or_else(|| {
                Err(FetchError::Status {
                    status: 404,
                    body: "city not found".to_string(),
                })
            })
    }
}

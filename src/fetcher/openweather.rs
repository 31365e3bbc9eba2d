//! OpenWeather Fetcher
//!
//! HTTP fetcher for the current-weather endpoint. Failures are reported as
//! network, status or malformed-payload errors.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::FetchError;
use crate::models::{UpstreamWeather, WeatherRecord};

use super::WeatherFetcher;

/// reqwest-backed fetcher for the OpenWeather current-weather endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherFetcher {
    http: Client,
    api_url: String,
    units: Option<String>,
}

impl OpenWeatherFetcher {
    // == Constructor ==
    /// Builds the HTTP client with the configured request timeout.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            units: config.units.clone(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl WeatherFetcher for OpenWeatherFetcher {
    #[instrument(skip(self, credential))]
    async fn fetch(&self, city: &str, credential: &str) -> Result<WeatherRecord, FetchError> {
        let mut query = vec![("q", city), ("appid", credential)];
        if let Some(units) = self.units.as_deref() {
            query.push(("units", units));
        }

        let res = self
            .http
            .get(&self.api_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.without_url().to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| FetchError::Network(e.without_url().to_string()))?;

        if !status.is_success() {
            debug!(%status, "Upstream rejected weather request");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let parsed: UpstreamWeather =
            serde_json::from_str(&body).map_err(|e| FetchError::Malformed(e.to_string()))?;

        Ok(parsed.into())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

//! Weather record returned by the SDK
//!
//! Serialized field names follow the upstream payload so that
//! `get_weather_as_json` output looks like what the API itself returns.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Condition summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Condition group, e.g. "Clear", "Rain"
    pub main: String,
    /// Human-readable description, e.g. "light rain"
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub temp: f64,
    pub feels_like: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed in the units requested upstream
    pub speed: f64,
}

/// Sunrise and sunset as unix seconds (UTC).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: i64,
    pub sunset: i64,
}

// == Weather Record ==
/// Current weather for one location.
///
/// Produced only by a fetcher and never mutated afterwards; the cache and
/// the refresher replace whole records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub weather: Condition,
    #[serde(rename = "main")]
    pub temperature: Temperature,
    /// Visibility in meters, absent for some stations
    pub visibility: Option<u32>,
    pub wind: Wind,
    /// Observation time as unix seconds
    #[serde(rename = "dt")]
    pub datetime: i64,
    pub sys: SunTimes,
    /// Offset from UTC in seconds
    pub timezone: i32,
    /// Location name as reported upstream
    pub name: String,
}

impl WeatherRecord {
    /// Observation time in UTC.
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.datetime, 0).single()
    }

    pub fn sunrise(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.sys.sunrise, 0).single()
    }

    pub fn sunset(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.sys.sunset, 0).single()
    }

    /// Observation time shifted into the location's own offset.
    pub fn local_observed_at(&self) -> Option<DateTime<FixedOffset>> {
        let offset = FixedOffset::east_opt(self.timezone)?;
        self.observed_at().map(|dt| dt.with_timezone(&offset))
    }
}

#[cfg(test)]
pub(crate) fn sample_record(name: &str, temp: f64, datetime: i64) -> WeatherRecord {
    WeatherRecord {
        weather: Condition {
            main: "Clear".to_string(),
            description: "clear sky".to_string(),
        },
        temperature: Temperature {
            temp,
            feels_like: temp - 2.0,
        },
        visibility: Some(10_000),
        wind: Wind { speed: 5.0 },
        datetime,
        sys: SunTimes {
            sunrise: 1_630_419_354,
            sunset: 1_630_473_684,
        },
        timezone: 3600,
        name: name.to_string(),
    }
}

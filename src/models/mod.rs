//! Weather data models
//!
//! `record` holds the immutable value handed to callers and cached per city;
//! `upstream` is the wire schema of the upstream current-weather payload.

pub mod record;
pub mod upstream;

// Re-export commonly used types
pub use record::{Condition, SunTimes, Temperature, WeatherRecord, Wind};
pub use upstream::UpstreamWeather;

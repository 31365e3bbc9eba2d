//! Weather SDK - current weather for named cities
//!
//! Wraps a remote weather API with a bounded per-credential TTL cache and an
//! optional background refresher that keeps cached cities up to date.
//!
//! ```no_run
//! # async fn demo() -> weather_sdk::error::Result<()> {
//! use weather_sdk::{Config, InstanceRegistry, Mode};
//!
//! let registry = InstanceRegistry::new(Config::from_env())?;
//! let sdk = registry.add_instance("my-api-key", Mode::Polling).await?;
//! let record = sdk.get_weather("London").await?;
//! println!("{}: {}", record.name, record.temperature.temp);
//! registry.remove_instance("my-api-key").await?;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod sdk;
pub mod tasks;

pub use config::Config;
pub use error::{FetchError, SdkError};
pub use fetcher::{OpenWeatherFetcher, WeatherFetcher};
pub use models::WeatherRecord;
pub use sdk::{InstanceRegistry, Mode, WeatherSdk};

//! Error types for the weather SDK
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

use crate::sdk::mask;

// == Fetch Error Enum ==
/// Failure classes reported by a weather fetcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, reading the body)
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream answered with a non-success status
    #[error("Upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected schema
    #[error("Malformed payload: {0}")]
    Malformed(String),
}

// == SDK Error Enum ==
/// Unified error type for the SDK surface.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Fetching weather for a city failed
    #[error("Weather retrieval failed for '{city}'")]
    WeatherRetrieval {
        city: String,
        #[source]
        source: FetchError,
    },

    /// A fetched record could not be converted to JSON
    #[error("Failed to serialize weather record: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An instance already exists for this credential
    #[error("An instance for credential '{}' already exists", mask(.0))]
    DuplicateInstance(String),

    /// No instance is registered for this credential
    #[error("No instance found for credential '{}'", mask(.0))]
    InstanceNotFound(String),

    /// City name was empty or blank
    #[error("Invalid city name: {0:?}")]
    InvalidCity(String),

    /// HTTP client could not be constructed
    #[error("Failed to build weather client: {0}")]
    Client(FetchError),
}

// == Result Type Alias ==
/// Convenience Result type for the SDK.
pub type Result<T> = std::result::Result<T, SdkError>;

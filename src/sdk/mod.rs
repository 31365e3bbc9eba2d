//! SDK Module
//!
//! Public surface: the per-credential [`WeatherSdk`] instance and the
//! [`InstanceRegistry`] that enforces one instance per credential.

mod instance;
mod mode;
mod registry;

pub use instance::WeatherSdk;
pub use mode::Mode;
pub use registry::InstanceRegistry;

pub(crate) use instance::mask;

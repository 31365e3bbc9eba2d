//! Background Tasks Module
//!
//! Contains the per-instance background refresher used in polling mode.
//!
//! # Tasks
//! - Refresher: re-fetches every cached city at a fixed period

use std::time::Duration;

mod refresher;

pub use refresher::{Refresher, RefresherState};

/// Default refresh period for polling instances (10 minutes)
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

/// Shortest refresh period a refresher will run with
pub const MIN_POLL_INTERVAL: Duration = Duration::from_secs(1);

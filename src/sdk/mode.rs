//! SDK Operating Mode
//!
//! Selects between lookup-driven fetching and background polling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operating mode of an SDK instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Fetch only when a lookup misses
    OnDemand,
    /// Additionally refresh every cached city in the background
    Polling,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::OnDemand => "on-demand",
            Mode::Polling => "polling",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "on-demand" | "on_demand" | "ondemand" => Ok(Mode::OnDemand),
            "polling" => Ok(Mode::Polling),
            _ => Err(format!(
                "Unknown mode '{value}'. Supported modes: on-demand, polling."
            )),
        }
    }
}

//! Background Refresher Task
//!
//! Periodically re-fetches every city present in an instance's cache.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::WeatherCache;
use crate::fetcher::WeatherFetcher;

use super::MIN_POLL_INTERVAL;

/// Lifecycle of a refresher: `Stopped -> Running -> Stopping -> Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefresherState {
    Stopped,
    Running,
    Stopping,
}

impl RefresherState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Running,
            2 => Self::Stopping,
            _ => Self::Stopped,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            Self::Stopped => 0,
            Self::Running => 1,
            Self::Stopping => 2,
        }
    }
}

#[derive(Debug)]
struct SharedState(AtomicU8);

impl SharedState {
    fn get(&self) -> RefresherState {
        RefresherState::from_u8(self.0.load(Ordering::Acquire))
    }

    fn set(&self, state: RefresherState) {
        self.0.store(state.as_u8(), Ordering::Release);
    }
}

/// Handle to a running refresher task.
///
/// Stopping is cooperative: the loop notices the signal while waiting for
/// the next period or between two cities, finishes any fetch in flight, and
/// exits. Dropping the handle without calling [`Refresher::stop`] closes the
/// stop channel, which ends the loop the same way.
#[derive(Debug)]
pub struct Refresher {
    stop_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
    state: Arc<SharedState>,
}

impl Refresher {
    /// Spawns the refresh loop for one instance.
    ///
    /// Every `interval` the task snapshots the cached cities, fetches each
    /// one without holding the cache lock, and stores successful results.
    /// A failed city is logged and skipped. Periods shorter than
    /// [`MIN_POLL_INTERVAL`] are raised to it.
    pub fn spawn(
        cache: Arc<RwLock<WeatherCache>>,
        fetcher: Arc<dyn WeatherFetcher>,
        credential: String,
        interval: Duration,
    ) -> Self {
        let interval = interval.max(MIN_POLL_INTERVAL);
        let (stop_tx, stop_rx) = watch::channel(false);
        let state = Arc::new(SharedState(AtomicU8::new(RefresherState::Running.as_u8())));
        let task_state = Arc::clone(&state);

        let handle = tokio::spawn(async move {
            info!(interval_secs = interval.as_secs(), "Starting background refresher");
            run(cache, fetcher, credential, interval, stop_rx).await;
            task_state.set(RefresherState::Stopped);
            info!("Background refresher stopped");
        });

        Self {
            stop_tx,
            handle,
            state,
        }
    }

    pub fn state(&self) -> RefresherState {
        self.state.get()
    }

    /// Signals the loop to stop and waits until the task has exited.
    pub async fn stop(self) {
        if self.state.get() == RefresherState::Running {
            self.state.set(RefresherState::Stopping);
        }
        // Err only means the loop already exited and dropped its receiver
        let _ = self.stop_tx.send(true);

        if let Err(e) = self.handle.await {
            warn!(error = %e, "Background refresher ended abnormally");
        }
        self.state.set(RefresherState::Stopped);
    }
}

async fn run(
    cache: Arc<RwLock<WeatherCache>>,
    fetcher: Arc<dyn WeatherFetcher>,
    credential: String,
    interval: Duration,
    mut stop_rx: watch::Receiver<bool>,
) {
    loop {
        tokio::select! {
            biased;
            _ = stop_rx.changed() => return,
            _ = tokio::time::sleep(interval) => {}
        }

        let cities = cache.read().await.cities();
        let mut refreshed = 0usize;

        for city in &cities {
            if stop_requested(&stop_rx) {
                return;
            }

            match fetcher.fetch(city, &credential).await {
                Ok(record) => {
                    cache.write().await.put(city, record);
                    refreshed += 1;
                }
                Err(e) => {
                    warn!(%city, error = %e, "Refresh failed, skipping city");
                }
            }
        }

        debug!(refreshed, total = cities.len(), "Refresh pass complete");
    }
}

fn stop_requested(stop_rx: &watch::Receiver<bool>) -> bool {
    *stop_rx.borrow() || stop_rx.has_changed().is_err()
}

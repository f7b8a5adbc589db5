// ── Discovery poller ──
//
// The one observer of the RefreshSignal. Each cycle acknowledges the pending
// request first, then fetches and applies a snapshot, so requests arriving
// mid-fetch schedule another cycle instead of being lost.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::CoreError;
use crate::refresh::RefreshSignal;
use crate::source::DiscoverySource;
use crate::store::SnapshotStore;

pub struct DiscoveryPoller {
    source: Arc<dyn DiscoverySource>,
    store: Arc<SnapshotStore>,
    signal: RefreshSignal,
    interval: Option<Duration>,
}

impl DiscoveryPoller {
    pub fn new(
        source: Arc<dyn DiscoverySource>,
        store: Arc<SnapshotStore>,
        signal: RefreshSignal,
    ) -> Self {
        Self {
            source,
            store,
            signal,
            interval: None,
        }
    }

    /// Also request a refresh every `interval`. Zero disables the timer.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = (!interval.is_zero()).then_some(interval);
        self
    }

    /// Fetch and apply one snapshot right now, bypassing the signal.
    pub async fn refresh_once(&self) -> Result<usize, CoreError> {
        let source = Arc::clone(&self.source);
        let snapshot = tokio::task::spawn_blocking(move || source.fetch())
            .await
            .map_err(|e| CoreError::Fetch {
                message: format!("discovery task failed: {e}"),
            })??;
        let count = snapshot.interfaces.len();
        self.store.apply(snapshot);
        Ok(count)
    }

    /// Serve refresh requests until `cancel` fires or every signal handle
    /// is dropped. Fetch failures are logged; the previous snapshot stays.
    pub async fn run(self, cancel: CancellationToken) {
        let mut observer = self.signal.subscribe();
        let mut ticker = self.interval.map(|period| {
            let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            ticker
        });

        info!(source = %self.source.describe(), "discovery poller started");

        loop {
            tokio::select! {
                () = cancel.cancelled() => break,
                () = next_tick(&mut ticker) => {
                    self.signal.request();
                    continue;
                }
                alive = observer.requested() => {
                    if !alive {
                        break;
                    }
                }
            }

            self.signal.acknowledge();
            match self.refresh_once().await {
                Ok(count) => debug!(interfaces = count, "refresh cycle complete"),
                Err(err) => warn!(error = %err, "refresh cycle failed"),
            }
        }

        info!("discovery poller stopped");
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

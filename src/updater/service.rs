use crate::store::memory::NodeStore;

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Drives the background mutation of the node collection.
///
/// Fires once per interval, starting one full interval after spawn (no
/// immediate update on startup). Each firing performs exactly one
/// `update_random` call.
pub struct UpdateLoop {
    store: Arc<NodeStore>,
    interval: Duration,
}

/// Handle to a running update loop. Dropping the handle leaves the loop
/// running; `shutdown` cancels it and waits for the task to finish.
pub struct UpdaterHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl UpdateLoop {
    pub fn new(store: Arc<NodeStore>, interval: Duration) -> Self {
        Self { store, interval }
    }

    /// Spawns the loop onto the runtime and returns immediately.
    pub fn spawn(self) -> UpdaterHandle {
        let token = CancellationToken::new();
        let loop_token = token.clone();

        let task = tokio::spawn(async move {
            self.run(loop_token).await;
        });

        UpdaterHandle { token, task }
    }

    async fn run(self, token: CancellationToken) {
        tracing::info!("Update loop started (interval: {:?})", self.interval);

        // First tick at T+interval. Delay behavior keeps firings at least
        // one interval apart under load instead of bursting missed ticks.
        let mut ticker = tokio::time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::info!("Update loop stopping");
                    break;
                }
                _ = ticker.tick() => {
                    let index = self.store.update_random().await;
                    tracing::debug!("Updated node {}", index);
                }
            }
        }
    }
}

impl UpdaterHandle {
    /// Cancels the loop and waits for the task to exit.
    pub async fn shutdown(self) {
        self.token.cancel();

        if let Err(e) = self.task.await {
            tracing::warn!("Update loop task failed: {}", e);
        }
    }
}

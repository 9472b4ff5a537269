use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::core::Tracker;

/// Handle to the background refresh loop started by [`Tracker::spawn_periodic`].
///
/// Stopping (or dropping) the handle ends the loop after the pass in
/// progress, if any, completes; a started pass is never cancelled.
pub struct RefreshHandle {
    inner: Option<JoinHandle<()>>,
    stop_tx: Option<oneshot::Sender<()>>,
}

impl RefreshHandle {
    fn new(inner: JoinHandle<()>, stop_tx: oneshot::Sender<()>) -> Self {
        Self {
            inner: Some(inner),
            stop_tx: Some(stop_tx),
        }
    }

    /// Request the loop to stop and wait for it to exit.
    pub async fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(join) = self.inner.take() {
            let _ = join.await;
        }
    }

    /// Returns `true` once the loop has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.inner.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Tracker {
    /// Run [`refresh`](Tracker::refresh) every `refresh_interval`, starting
    /// immediately. Must be called from within a tokio runtime.
    ///
    /// Ticks missed while a slow pass runs are delayed, not bunched up.
    pub fn spawn_periodic(self: &Arc<Self>) -> RefreshHandle {
        let tracker = Arc::clone(self);
        let period = self.cfg.refresh_interval;
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let join = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        let _report = tracker.refresh().await;
                        #[cfg(feature = "tracing")]
                        tracing::debug!(report = ?_report, "periodic refresh finished");
                    }
                }
            }
        });

        RefreshHandle::new(join, stop_tx)
    }
}

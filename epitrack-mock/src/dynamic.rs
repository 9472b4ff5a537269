use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

use epitrack_core::connector::{FeedConnector, HistorySource, SnapshotSource};
use epitrack_core::{DataSource, EpiError, HistoricalFeeds, SnapshotItem};

/// Instruction for how a fetch should behave.
#[derive(Clone, Debug)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(EpiError),
    /// Wait for the controller to release the gate, then return the value.
    Gated(T),
    /// Hang indefinitely.
    Hang,
}

struct Channel<T> {
    behavior: Mutex<Option<MockBehavior<T>>>,
    calls: AtomicUsize,
    gate: Notify,
}

impl<T: Clone> Channel<T> {
    fn new() -> Self {
        Self {
            behavior: Mutex::new(None),
            calls: AtomicUsize::new(0),
            gate: Notify::new(),
        }
    }

    async fn fetch(&self, source: DataSource) -> Result<T, EpiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // Snapshot the behavior without holding the lock across await points
        let behavior = self.behavior.lock().await.clone();
        match behavior {
            Some(MockBehavior::Return(v)) => Ok(v),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Gated(v)) => {
                self.gate.notified().await;
                Ok(v)
            }
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(EpiError::Unsupported(source.to_string())),
        }
    }
}

struct InternalState {
    history: Channel<HistoricalFeeds>,
    snapshot: Channel<Vec<SnapshotItem>>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<InternalState>,
}

impl DynamicMockController {
    /// Set the behavior of subsequent `fetch_history` calls.
    pub async fn set_history_behavior(&self, behavior: MockBehavior<HistoricalFeeds>) {
        *self.state.history.behavior.lock().await = Some(behavior);
    }

    /// Set the behavior of subsequent `fetch_snapshot` calls.
    pub async fn set_snapshot_behavior(&self, behavior: MockBehavior<Vec<SnapshotItem>>) {
        *self.state.snapshot.behavior.lock().await = Some(behavior);
    }

    /// Let one gated `fetch_history` call complete.
    ///
    /// A release issued before the fetch reaches the gate is kept and consumed
    /// by the next gated call.
    pub fn release_history(&self) {
        self.state.history.gate.notify_one();
    }

    /// Let one gated `fetch_snapshot` call complete.
    pub fn release_snapshot(&self) {
        self.state.snapshot.gate.notify_one();
    }

    /// Number of `fetch_history` calls started so far.
    #[must_use]
    pub fn history_calls(&self) -> usize {
        self.state.history.calls.load(Ordering::SeqCst)
    }

    /// Number of `fetch_snapshot` calls started so far.
    #[must_use]
    pub fn snapshot_calls(&self) -> usize {
        self.state.snapshot.calls.load(Ordering::SeqCst)
    }

    /// Clear all configured behaviors; counters are kept.
    pub async fn clear_all_behaviors(&self) {
        *self.state.history.behavior.lock().await = None;
        *self.state.snapshot.behavior.lock().await = None;
    }
}

/// A connector that defers all behavior to an external controller.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<InternalState>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn FeedConnector>, DynamicMockController) {
        let state = Arc::new(InternalState {
            history: Channel::new(),
            snapshot: Channel::new(),
        });
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn FeedConnector>, controller)
    }
}

impl FeedConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_history_source(&self) -> Option<&dyn HistorySource> {
        Some(self as &dyn HistorySource)
    }

    fn as_snapshot_source(&self) -> Option<&dyn SnapshotSource> {
        Some(self as &dyn SnapshotSource)
    }
}

#[async_trait]
impl HistorySource for DynamicMockConnector {
    async fn fetch_history(&self) -> Result<HistoricalFeeds, EpiError> {
        self.state.history.fetch(DataSource::History).await
    }
}

#[async_trait]
impl SnapshotSource for DynamicMockConnector {
    async fn fetch_snapshot(&self) -> Result<Vec<SnapshotItem>, EpiError> {
        self.state.snapshot.fetch(DataSource::Snapshot).await
    }
}

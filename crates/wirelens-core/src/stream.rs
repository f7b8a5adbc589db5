// ── Snapshot subscriptions ──
//
// Subscription handle vended by the SnapshotStore. Front ends await
// `changed()`, or consume it as a `Stream`, to re-render after each
// discovery cycle.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::store::InterfaceMap;

/// A subscription to the store's interface collection.
pub struct InterfaceStream {
    current: Arc<InterfaceMap>,
    receiver: watch::Receiver<Arc<InterfaceMap>>,
}

impl InterfaceStream {
    pub(crate) fn new(receiver: watch::Receiver<Arc<InterfaceMap>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// The snapshot captured at creation time or at the last `changed()`.
    pub fn current(&self) -> &Arc<InterfaceMap> {
        &self.current
    }

    /// Wait for the next applied snapshot.
    /// Returns `None` once the store has been dropped.
    pub async fn changed(&mut self) -> Option<Arc<InterfaceMap>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream` of the snapshots applied from now on. The
    /// snapshot already seen is not repeated.
    pub fn into_stream(self) -> InterfaceWatchStream {
        InterfaceWatchStream {
            inner: WatchStream::from_changes(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
pub struct InterfaceWatchStream {
    inner: WatchStream<Arc<InterfaceMap>>,
}

impl Stream for InterfaceWatchStream {
    type Item = Arc<InterfaceMap>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

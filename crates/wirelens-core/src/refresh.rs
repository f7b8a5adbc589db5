// ── Refresh request signal ──
//
// Single-slot publish/observe cell. Any number of trigger controls call
// `request()`; the discovery poller waits on `requested()` and calls
// `acknowledge()` once it has started a cycle. Requests do not queue:
// while one is pending, further requests are no-ops.

use std::sync::Arc;

use tokio::sync::watch;

/// Shared refresh trigger. Cheap to clone; all clones share one cell.
#[derive(Debug, Clone)]
pub struct RefreshSignal {
    pending: Arc<watch::Sender<bool>>,
}

impl RefreshSignal {
    pub fn new() -> Self {
        let (pending, _) = watch::channel(false);
        Self {
            pending: Arc::new(pending),
        }
    }

    /// Ask for a refresh. Returns `true` if this call moved the signal from
    /// idle to requested, `false` if a refresh was already pending.
    pub fn request(&self) -> bool {
        let raised = self.pending.send_if_modified(|pending| {
            if *pending {
                false
            } else {
                *pending = true;
                true
            }
        });
        if raised {
            tracing::debug!("refresh requested");
        }
        raised
    }

    /// Return to idle. Returns `true` if a request was pending.
    pub fn acknowledge(&self) -> bool {
        self.pending.send_if_modified(|pending| std::mem::replace(pending, false))
    }

    pub fn is_requested(&self) -> bool {
        *self.pending.borrow()
    }

    /// Observer handle for the polling side.
    pub fn subscribe(&self) -> RefreshObserver {
        RefreshObserver {
            pending: self.pending.subscribe(),
        }
    }
}

impl Default for RefreshSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving end of a [`RefreshSignal`].
#[derive(Debug, Clone)]
pub struct RefreshObserver {
    pending: watch::Receiver<bool>,
}

impl RefreshObserver {
    /// Wait until a refresh is pending. Resolves immediately if one already
    /// is. Returns `false` once every [`RefreshSignal`] handle is gone.
    pub async fn requested(&mut self) -> bool {
        self.pending.wait_for(|pending| *pending).await.is_ok()
    }
}

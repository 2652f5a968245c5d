//! Debounced input commit.
//!
//! Raw keystrokes update a draft; the draft only becomes the committed
//! value after a quiet window with no newer submission. Each submission
//! arms a fresh timer and cancels the pending one, mirroring the console's
//! cancel-and-restart search-box timer. Committed values are published on a
//! watch channel so derived results recompute once per settled query, not
//! once per keystroke.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Quiet window between the last submission and the committed value.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Cancellable commit timer for a draft/committed value pair.
///
/// Timer tasks run on the ambient Tokio runtime; `submit` must be called
/// from within one.
pub struct Debouncer<T> {
    window: Duration,
    committed: Arc<watch::Sender<T>>,
    pending: Mutex<Option<CancellationToken>>,
}

impl<T: Clone + Send + Sync + 'static> Debouncer<T> {
    pub fn new(window: Duration, initial: T) -> Self {
        let (committed, _) = watch::channel(initial);
        Self {
            window,
            committed: Arc::new(committed),
            pending: Mutex::new(None),
        }
    }

    /// Receiver for committed values; `changed()` resolves on each commit.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.committed.subscribe()
    }

    /// The latest committed value.
    pub fn committed(&self) -> T {
        self.committed.borrow().clone()
    }

    /// Schedule `draft` to commit after the quiet window, superseding any
    /// pending commit.
    pub fn submit(&self, draft: T) {
        let token = self.arm();
        let committed = Arc::clone(&self.committed);
        let window = self.window;
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(window) => {
                    committed.send_replace(draft);
                }
                _ = token.cancelled() => {}
            }
        });
    }

    /// Commit immediately, dropping any pending draft (clearing the box).
    pub fn flush(&self, value: T) {
        self.cancel_pending();
        self.committed.send_replace(value);
    }

    /// Drop the pending draft without committing anything.
    pub fn cancel_pending(&self) {
        if let Some(token) = self.pending.lock().take() {
            token.cancel();
        }
    }

    /// Replace the pending token, cancelling the previous timer.
    fn arm(&self) -> CancellationToken {
        let token = CancellationToken::new();
        if let Some(old) = self.pending.lock().replace(token.clone()) {
            old.cancel();
        }
        token
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(token) = self.pending.lock().take() {
            token.cancel();
        }
    }
}

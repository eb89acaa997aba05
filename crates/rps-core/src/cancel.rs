//! One-shot cooperative cancellation.
//!
//! The input collaborator raises the token once the human confirms an exit;
//! the session polls it at every checkpoint. Whoever owns the process holds
//! the matching [`CancelWaiter`] and blocks until the token is raised or every
//! token has been dropped, which is what happens when the session thread dies.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam::channel::{self, Receiver, Sender};

/// A cloneable, raise-once cancellation signal.
#[derive(Debug, Clone)]
pub struct CancelToken {
    raised: Arc<AtomicBool>,
    signal: Sender<()>,
}

/// The receiving end of a [`CancelToken`].
#[derive(Debug)]
pub struct CancelWaiter {
    raised: Arc<AtomicBool>,
    signal: Receiver<()>,
}

/// Why [`CancelWaiter::wait`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// A token was raised.
    Cancelled,
    /// Every token was dropped without being raised.
    Abandoned,
}

impl CancelToken {
    /// Create a token nobody waits on.
    pub fn new() -> Self {
        Self::with_waiter().0
    }

    /// Create a token together with its waiter.
    pub fn with_waiter() -> (Self, CancelWaiter) {
        let raised = Arc::new(AtomicBool::new(false));
        let (tx, rx) = channel::bounded(1);
        let token = Self {
            raised: Arc::clone(&raised),
            signal: tx,
        };
        let waiter = CancelWaiter { raised, signal: rx };
        (token, waiter)
    }

    /// Raise the signal. Raising twice is a no-op.
    pub fn cancel(&self) {
        if !self.raised.swap(true, Ordering::SeqCst) {
            // No waiter, or one already released: nothing to wake.
            let _ = self.signal.try_send(());
        }
    }

    /// Whether the signal has been raised.
    pub fn is_cancelled(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelWaiter {
    /// Whether the signal has been raised.
    pub fn is_cancelled(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    /// Block until a token is raised or the last token is dropped.
    pub fn wait(&self) -> Release {
        match self.signal.recv() {
            Ok(()) => Release::Cancelled,
            Err(_) if self.is_cancelled() => Release::Cancelled,
            Err(_) => Release::Abandoned,
        }
    }
}

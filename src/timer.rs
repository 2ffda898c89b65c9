//! Pending disarm of the reset confirmation.
//!
//! `DisarmTimer` owns the spawned sleep task. Dropping it aborts the task, so
//! replacing, clearing, or dropping the owning session always cancels a
//! pending disarm.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::reset::Epoch;

/// Scoped handle for one scheduled disarm. Aborts on drop.
#[derive(Debug)]
pub struct DisarmTimer {
    epoch: Epoch,
    handle: JoinHandle<()>,
}

impl DisarmTimer {
    /// Sleep for `after`, then send `make(epoch)` on `tx`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<T, F>(epoch: Epoch, after: Duration, tx: mpsc::Sender<T>, make: F) -> Self
    where
        T: Send + 'static,
        F: FnOnce(Epoch) -> T + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if tx.send(make(epoch)).await.is_err() {
                debug!(epoch, "disarm fired after session closed");
            }
        });
        Self { epoch, handle }
    }

    /// The arm cycle this timer belongs to.
    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Whether the timer task has finished (fired or aborted).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for DisarmTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

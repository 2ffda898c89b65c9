//! Session driver: the event loop around `EngineCore`.
//!
//! DESIGN
//! ======
//! One tokio task owns the engine. Intents arrive on a bounded mpsc queue and
//! are applied strictly one at a time in arrival order; after every intent
//! that changed visible state a fresh `Snapshot` is published on a watch
//! channel for the presentation layer.
//!
//! The reset confirmation timer is the only deferred work. It is a
//! `DisarmTimer` held by the session: scheduling replaces (and so aborts) the
//! previous one, cancel drops it, and leaving the loop drops it. When it fires
//! it posts `Intent::DisarmExpired` back into the same queue, so the disarm is
//! ordered with every other intent.
//!
//! The session keeps only a weak sender for its own timers, so the loop ends
//! once every `SessionHandle` is gone and any pending disarm has fired.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::board::ColumnId;
use crate::card::CardId;
use crate::config::BoardConfig;
use crate::drag::{DragItem, DropZone};
use crate::engine::{Action, EngineCore, Outcome};
use crate::reset::Epoch;
use crate::row::Row;
use crate::snapshot::Snapshot;
use crate::timer::DisarmTimer;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("board session closed")]
    Closed,
}

/// Inbound events, from the presentation layer or the disarm timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    BeginDrag(DragItem),
    DragOver(DropZone),
    DragLeave,
    EndDrag,
    Drop { column: Option<ColumnId>, row: Row },
    Remove { column: ColumnId, row: Row, card: CardId },
    RequestReset,
    DisarmExpired { epoch: Epoch },
    Shutdown,
}

struct Envelope {
    intent: Intent,
    reply: Option<oneshot::Sender<Outcome>>,
}

// =============================================================================
// HANDLE
// =============================================================================

/// Cloneable front door to a running session.
#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<Envelope>,
    snapshots: watch::Receiver<Snapshot>,
}

impl SessionHandle {
    /// Queue an intent and wait until the session has applied it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] if the session loop has stopped.
    pub async fn dispatch(&self, intent: Intent) -> Result<Outcome, SessionError> {
        let (reply, outcome) = oneshot::channel();
        self.tx
            .send(Envelope { intent, reply: Some(reply) })
            .await
            .map_err(|_| SessionError::Closed)?;
        outcome.await.map_err(|_| SessionError::Closed)
    }

    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] if the session loop has stopped.
    pub async fn begin_drag(&self, item: DragItem) -> Result<Outcome, SessionError> {
        self.dispatch(Intent::BeginDrag(item)).await
    }

    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] if the session loop has stopped.
    pub async fn drag_over(&self, zone: DropZone) -> Result<Outcome, SessionError> {
        self.dispatch(Intent::DragOver(zone)).await
    }

    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] if the session loop has stopped.
    pub async fn drag_leave(&self) -> Result<Outcome, SessionError> {
        self.dispatch(Intent::DragLeave).await
    }

    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] if the session loop has stopped.
    pub async fn end_drag(&self) -> Result<Outcome, SessionError> {
        self.dispatch(Intent::EndDrag).await
    }

    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] if the session loop has stopped.
    pub async fn drop_card(&self, column: Option<ColumnId>, row: Row) -> Result<Outcome, SessionError> {
        self.dispatch(Intent::Drop { column, row }).await
    }

    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] if the session loop has stopped.
    pub async fn remove(&self, column: ColumnId, row: Row, card: CardId) -> Result<Outcome, SessionError> {
        self.dispatch(Intent::Remove { column, row, card }).await
    }

    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] if the session loop has stopped.
    pub async fn request_reset(&self) -> Result<Outcome, SessionError> {
        self.dispatch(Intent::RequestReset).await
    }

    /// Stop the session. Any pending disarm is cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] if the session loop has already stopped.
    pub async fn shutdown(&self) -> Result<Outcome, SessionError> {
        self.dispatch(Intent::Shutdown).await
    }

    /// The most recently published state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Watch for state published after each transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// The event loop that owns an `EngineCore` and its disarm timer.
pub struct Session {
    core: EngineCore,
    rx: mpsc::Receiver<Envelope>,
    timer_tx: mpsc::WeakSender<Envelope>,
    snapshots: watch::Sender<Snapshot>,
    timer: Option<DisarmTimer>,
}

impl Session {
    /// Wrap `core` in a session. Call [`Session::run`] to start processing.
    #[must_use]
    pub fn new(core: EngineCore, config: &BoardConfig) -> (Self, SessionHandle) {
        let (tx, rx) = mpsc::channel(config.intent_queue_capacity.max(1));
        let (snapshots, snapshot_rx) = watch::channel(core.snapshot());
        let session = Self { core, rx, timer_tx: tx.downgrade(), snapshots, timer: None };
        (session, SessionHandle { tx, snapshots: snapshot_rx })
    }

    /// Start a session with a freshly shuffled palette on the current runtime.
    #[must_use]
    pub fn spawn(config: BoardConfig) -> (SessionHandle, JoinHandle<()>) {
        let (session, handle) = Self::new(EngineCore::new(&config), &config);
        (handle, tokio::spawn(session.run()))
    }

    /// Process intents until shutdown or until every handle is dropped.
    pub async fn run(mut self) {
        info!(palette = self.core.palette().len(), "board session started");

        while let Some(Envelope { intent, reply }) = self.rx.recv().await {
            let outcome = if intent == Intent::Shutdown {
                Outcome::Applied
            } else {
                self.apply(intent.clone())
            };

            if let Some(reply) = reply {
                if reply.send(outcome).is_err() {
                    debug!(?intent, "caller went away before reply");
                }
            }
            if intent == Intent::Shutdown {
                break;
            }
        }

        if self.timer.take().is_some() {
            debug!("pending disarm cancelled on session exit");
        }
        info!(columns = self.core.column_count(), "board session stopped");
    }

    fn apply(&mut self, intent: Intent) -> Outcome {
        let step = match intent {
            Intent::BeginDrag(item) => self.core.begin_drag(item),
            Intent::DragOver(zone) => self.core.drag_over(zone),
            Intent::DragLeave => self.core.drag_leave(),
            Intent::EndDrag => self.core.end_drag(),
            Intent::Drop { column, row } => self.core.drop_card(column, row),
            Intent::Remove { column, row, card } => self.core.remove(column, row, card),
            Intent::RequestReset => self.core.request_reset(),
            Intent::DisarmExpired { epoch } => {
                if self.timer.as_ref().is_some_and(|t| t.epoch() == epoch) {
                    self.timer = None;
                }
                self.core.disarm_expired(epoch)
            }
            Intent::Shutdown => return Outcome::Applied,
        };

        for action in &step.actions {
            self.execute(action);
        }
        if !step.is_applied() {
            debug!(outcome = ?step.outcome, "intent ignored");
        }
        self.publish();
        step.outcome
    }

    /// Publish the current state if it differs from the last published one.
    /// A discarded drop still clears the drag, so this is keyed on state,
    /// not on the outcome.
    fn publish(&self) {
        let next = self.core.snapshot();
        self.snapshots.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }

    fn execute(&mut self, action: &Action) {
        match *action {
            Action::ScheduleDisarm { epoch, after } => {
                let Some(tx) = self.timer_tx.upgrade() else {
                    debug!(epoch, "no handles left, disarm not scheduled");
                    return;
                };
                let timer = DisarmTimer::spawn(epoch, after, tx, |epoch| Envelope {
                    intent: Intent::DisarmExpired { epoch },
                    reply: None,
                });
                if let Some(prev) = self.timer.replace(timer) {
                    debug!(epoch = prev.epoch(), "replaced pending disarm");
                }
            }
            Action::CancelDisarm => {
                if let Some(prev) = self.timer.take() {
                    debug!(epoch = prev.epoch(), "pending disarm cancelled");
                }
            }
            Action::ColumnCreated { .. }
            | Action::CardPlaced { .. }
            | Action::ColumnRemoved { .. }
            | Action::CardRemoved { .. }
            | Action::BoardCleared { .. } => {}
        }
    }
}

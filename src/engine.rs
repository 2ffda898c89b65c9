//! Board state manager.
//!
//! `EngineCore` owns the palette, the columns, the in-flight drag, the
//! highlighted drop zone, and the reset confirmation. Every intent is a plain
//! synchronous method that returns a [`Step`]: whether the intent changed
//! anything, and the [`Action`]s the host must carry out (timer scheduling,
//! re-render hints). Malformed references are never errors; they come back as
//! [`Outcome::Ignored`] with the reason.
//!
//! The core holds no timers itself. Arming the reset emits
//! [`Action::ScheduleDisarm`] and the host later calls
//! [`EngineCore::disarm_expired`] with the same epoch.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::time::Duration;

use tracing::{debug, info};

use crate::board::{Board, Column, ColumnId};
use crate::card::{CardId, CardName};
use crate::config::BoardConfig;
use crate::drag::{DragItem, DropZone};
use crate::palette::Palette;
use crate::reset::{Epoch, ResetGuard, ResetRequest};
use crate::row::{Category, Row};
use crate::snapshot::Snapshot;

/// Why an intent left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Drop or drag-end with nothing being dragged.
    NoDragInFlight,
    /// The target column doesn't exist (or none was given for an ordinary row).
    UnknownColumn,
    /// The card isn't in the named cell.
    UnknownCard,
    /// A disarm arrived for an arm cycle that already ended.
    StaleTimer,
}

/// Whether an intent changed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(IgnoreReason),
}

/// Effects returned from intents for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ColumnCreated { column: ColumnId, name: CardName },
    CardPlaced { column: ColumnId, category: Category, card: CardId },
    ColumnRemoved { column: ColumnId, cards: usize },
    CardRemoved { column: ColumnId, category: Category, card: CardId },
    /// Start the disarm timer for `epoch`, replacing any pending one.
    ScheduleDisarm { epoch: Epoch, after: Duration },
    /// Drop any pending disarm timer.
    CancelDisarm,
    BoardCleared { columns: usize },
}

/// Result of one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub outcome: Outcome,
    pub actions: Vec<Action>,
}

impl Step {
    fn applied(actions: Vec<Action>) -> Self {
        Self { outcome: Outcome::Applied, actions }
    }

    fn ignored(reason: IgnoreReason) -> Self {
        Self { outcome: Outcome::Ignored(reason), actions: Vec::new() }
    }

    /// Whether the intent changed state.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.outcome == Outcome::Applied
    }
}

/// The board state manager. Owns every piece of session state.
pub struct EngineCore {
    palette: Palette,
    board: Board,
    drag: Option<DragItem>,
    drop_zone: Option<DropZone>,
    reset: ResetGuard,
    reset_confirm: Duration,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}

impl EngineCore {
    /// Start a session with a freshly shuffled palette.
    #[must_use]
    pub fn new(config: &BoardConfig) -> Self {
        Self::with_palette(Palette::shuffled(), config)
    }

    /// Start a session with a given palette.
    #[must_use]
    pub fn with_palette(palette: Palette, config: &BoardConfig) -> Self {
        Self {
            palette,
            board: Board::new(),
            drag: None,
            drop_zone: None,
            reset: ResetGuard::new(),
            reset_confirm: config.reset_confirm,
        }
    }

    // --- Drag ---

    /// Record `item` as the card in flight, replacing any previous one.
    pub fn begin_drag(&mut self, item: DragItem) -> Step {
        if let Some(prev) = self.drag.replace(item) {
            debug!(superseded = %prev.name, name = %item.name, "drag superseded");
        } else {
            debug!(name = %item.name, source = ?item.source, "drag started");
        }
        Step::applied(Vec::new())
    }

    /// Highlight the zone under the pointer.
    pub fn drag_over(&mut self, zone: DropZone) -> Step {
        if let Some(column) = zone.column() {
            if !self.board.contains(&column) {
                return Step::ignored(IgnoreReason::UnknownColumn);
            }
        }
        self.drop_zone = Some(zone);
        Step::applied(Vec::new())
    }

    /// Clear the highlighted zone.
    pub fn drag_leave(&mut self) -> Step {
        self.drop_zone = None;
        Step::applied(Vec::new())
    }

    /// Abandon the drag without dropping.
    ///
    /// Clears a lingering zone highlight even with no drag in flight; only
    /// a call that clears nothing is ignored.
    pub fn end_drag(&mut self) -> Step {
        let zone = self.drop_zone.take();
        match self.drag.take() {
            Some(item) => {
                debug!(name = %item.name, "drag abandoned");
                Step::applied(Vec::new())
            }
            None if zone.is_some() => Step::applied(Vec::new()),
            None => Step::ignored(IgnoreReason::NoDragInFlight),
        }
    }

    /// Drop the card in flight onto `(column, row)`.
    ///
    /// The header row always creates a new column and ignores `column`.
    /// Ordinary rows append to the named column's cell. The drag is cleared
    /// whether or not the drop landed. The origin of a board-sourced drag is
    /// left as it was.
    pub fn drop_card(&mut self, column: Option<ColumnId>, row: Row) -> Step {
        let Some(item) = self.drag.take() else {
            return Step::ignored(IgnoreReason::NoDragInFlight);
        };
        self.drop_zone = None;

        let mut actions = match row.category() {
            None => {
                let id = self.board.push_column(item.name);
                debug!(column = %id, name = %item.name, "column created");
                vec![Action::ColumnCreated { column: id, name: item.name }]
            }
            Some(category) => {
                let placed = column.and_then(|col| self.board.place(&col, category, item.name).map(|card| (col, card)));
                let Some((col, card)) = placed else {
                    debug!(column = ?column, %row, name = %item.name, "drop on unknown column discarded");
                    return Step::ignored(IgnoreReason::UnknownColumn);
                };
                debug!(column = %col, %category, name = %item.name, "card placed");
                vec![Action::CardPlaced { column: col, category, card }]
            }
        };

        self.disarm_on_edit(&mut actions);
        Step::applied(actions)
    }

    // --- Removal ---

    /// Remove a card. On the header row this deletes the whole column and
    /// everything in it; `card` is not consulted there.
    pub fn remove(&mut self, column: ColumnId, row: Row, card: CardId) -> Step {
        let mut actions = match row.category() {
            None => {
                let Some(removed) = self.board.remove_column(&column) else {
                    return Step::ignored(IgnoreReason::UnknownColumn);
                };
                let cards = removed.rows.card_count();
                debug!(%column, cards, "column removed");
                vec![Action::ColumnRemoved { column, cards }]
            }
            Some(category) => {
                if !self.board.contains(&column) {
                    return Step::ignored(IgnoreReason::UnknownColumn);
                }
                if self.board.remove_card(&column, category, &card).is_none() {
                    return Step::ignored(IgnoreReason::UnknownCard);
                }
                debug!(%column, %category, %card, "card removed");
                vec![Action::CardRemoved { column, category, card }]
            }
        };

        if self.drop_zone.and_then(|z| z.column()).is_some_and(|c| !self.board.contains(&c)) {
            self.drop_zone = None;
        }
        self.disarm_on_edit(&mut actions);
        Step::applied(actions)
    }

    // --- Reset ---

    /// First call arms the confirmation; a second call while armed wipes
    /// every column. The palette is never touched.
    pub fn request_reset(&mut self) -> Step {
        match self.reset.request() {
            ResetRequest::Armed { epoch } => {
                debug!(epoch, "reset armed");
                Step::applied(vec![Action::ScheduleDisarm { epoch, after: self.reset_confirm }])
            }
            ResetRequest::Commit => {
                let columns = self.board.clear();
                self.drop_zone = None;
                info!(columns, "board cleared");
                Step::applied(vec![Action::CancelDisarm, Action::BoardCleared { columns }])
            }
        }
    }

    /// The disarm timer for `epoch` fired.
    pub fn disarm_expired(&mut self, epoch: Epoch) -> Step {
        if self.reset.expire(epoch) {
            debug!(epoch, "reset confirmation expired");
            Step::applied(Vec::new())
        } else {
            Step::ignored(IgnoreReason::StaleTimer)
        }
    }

    /// A board edit while armed cancels the pending confirmation.
    fn disarm_on_edit(&mut self, actions: &mut Vec<Action>) {
        if self.reset.disarm() {
            debug!("reset confirmation cancelled by edit");
            actions.push(Action::CancelDisarm);
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        self.board.columns()
    }

    /// Look up a column by id.
    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.board.get(id)
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.board.len()
    }

    /// The card in flight, if any.
    #[must_use]
    pub fn drag(&self) -> Option<&DragItem> {
        self.drag.as_ref()
    }

    #[must_use]
    pub fn drop_zone(&self) -> Option<DropZone> {
        self.drop_zone
    }

    #[must_use]
    pub fn is_confirming_reset(&self) -> bool {
        self.reset.is_armed()
    }

    /// Copy of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            palette: self.palette.names().to_vec(),
            columns: self.board.columns().to_vec(),
            confirming_reset: self.reset.is_armed(),
            drag: self.drag,
            drop_zone: self.drop_zone,
        }
    }
}

//! Drag model: what is being dragged, where it came from, and where it hovers.
//!
//! A `DragItem` lives only between drag-start and drop (or drag-end). The
//! `DragSource` records whether the card left the palette or an existing
//! board cell. Board-sourced drags still copy the card; the origin cell keeps
//! its instance.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use serde::Serialize;

use crate::board::ColumnId;
use crate::card::{CardId, CardName};
use crate::row::{Category, Row};

/// Where a dragged card was picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DragSource {
    /// A palette template.
    Palette,
    /// A card already placed on the board.
    Board {
        /// Column the card was picked from.
        column: ColumnId,
        /// Row the card was picked from (the header for a classification card).
        row: Row,
        /// The placed instance being dragged.
        card: CardId,
    },
}

/// The card currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DragItem {
    /// Name carried to the drop target.
    pub name: CardName,
    /// Origin of the drag.
    pub source: DragSource,
}

impl DragItem {
    /// A drag that starts in the palette.
    #[must_use]
    pub fn from_palette(name: CardName) -> Self {
        Self { name, source: DragSource::Palette }
    }

    /// A drag that starts on a placed card.
    #[must_use]
    pub fn from_board(name: CardName, column: ColumnId, row: Row, card: CardId) -> Self {
        Self { name, source: DragSource::Board { column, row, card } }
    }
}

/// The drop target currently under the pointer, used for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DropZone {
    /// The "add column" slot at the end of the header row.
    NewColumn,
    /// An ordinary cell of an existing column.
    Cell {
        column: ColumnId,
        category: Category,
    },
}

impl DropZone {
    /// The zone a drop on `(column, row)` would land in, if the pair is
    /// meaningful. The header row ignores `column`; ordinary rows need one.
    #[must_use]
    pub fn for_target(column: Option<ColumnId>, row: Row) -> Option<Self> {
        match row.category() {
            None => Some(Self::NewColumn),
            Some(category) => column.map(|column| Self::Cell { column, category }),
        }
    }

    /// The column this zone belongs to, if any.
    #[must_use]
    pub fn column(&self) -> Option<ColumnId> {
        match self {
            Self::NewColumn => None,
            Self::Cell { column, .. } => Some(*column),
        }
    }
}

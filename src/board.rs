//! Board model: columns, their cells, and the ordered column store.
//!
//! A `Column` is keyed by its classification card and owns one ordered card
//! sequence per ordinary `Category`. `Rows` is a fixed array indexed by
//! category, so a column can never be missing a cell. `Board` keeps columns in
//! creation order and is the only place cards are added or removed.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::card::{Card, CardId, CardName};
use crate::row::Category;

/// Unique identifier for a column.
pub type ColumnId = Uuid;

/// Per-category card sequences of one column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rows {
    cells: [Vec<Card>; Category::COUNT],
}

impl Rows {
    /// Cards in `category`, in drop order.
    #[must_use]
    pub fn cards(&self, category: Category) -> &[Card] {
        &self.cells[category.index()]
    }

    /// Iterate `(category, cards)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Card])> {
        Category::ALL.into_iter().map(move |c| (c, self.cards(c)))
    }

    /// Total number of placed cards across all categories.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    fn push(&mut self, category: Category, card: Card) {
        self.cells[category.index()].push(card);
    }

    fn remove(&mut self, category: Category, card_id: &CardId) -> Option<Card> {
        let cell = &mut self.cells[category.index()];
        let pos = cell.iter().position(|c| &c.id == card_id)?;
        Some(cell.remove(pos))
    }
}

impl Serialize for Rows {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, cards) in self.iter() {
            map.serialize_entry(&category, cards)?;
        }
        map.end()
    }
}

/// One classification column of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Identifier minted when the column was created.
    pub id: ColumnId,
    /// The header card that defines this column. Never replaced.
    pub classification: Card,
    /// Cards placed under each ordinary category.
    pub rows: Rows,
}

impl Column {
    /// Create a column headed by a fresh instance of `name`, with every cell empty.
    #[must_use]
    pub fn new(name: CardName) -> Self {
        Self { id: Uuid::new_v4(), classification: Card::new(name), rows: Rows::default() }
    }

    /// Cards in `category`, in drop order.
    #[must_use]
    pub fn cards(&self, category: Category) -> &[Card] {
        self.rows.cards(category)
    }
}

/// Ordered store of columns. Creation order is display order.
#[derive(Debug, Clone, Default)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self { columns: Vec::new() }
    }

    /// Append a new column headed by `name`. Returns its id.
    pub fn push_column(&mut self, name: CardName) -> ColumnId {
        let column = Column::new(name);
        let id = column.id;
        self.columns.push(column);
        id
    }

    /// Append a fresh `name` card to the end of a cell. Returns the new card's
    /// id, or `None` if the column doesn't exist.
    pub fn place(&mut self, column_id: &ColumnId, category: Category, name: CardName) -> Option<CardId> {
        let column = self.get_mut(column_id)?;
        let card = Card::new(name);
        let id = card.id;
        column.rows.push(category, card);
        Some(id)
    }

    /// Remove a whole column along with every card it holds.
    pub fn remove_column(&mut self, column_id: &ColumnId) -> Option<Column> {
        let pos = self.columns.iter().position(|c| &c.id == column_id)?;
        Some(self.columns.remove(pos))
    }

    /// Remove one card from a cell, keeping the order of the rest.
    pub fn remove_card(&mut self, column_id: &ColumnId, category: Category, card_id: &CardId) -> Option<Card> {
        self.get_mut(column_id)?.rows.remove(category, card_id)
    }

    /// Drop every column. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.columns.len();
        self.columns.clear();
        removed
    }

    #[must_use]
    pub fn get(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == column_id)
    }

    fn get_mut(&mut self, column_id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == column_id)
    }

    /// Whether a column with this id exists.
    #[must_use]
    pub fn contains(&self, column_id: &ColumnId) -> bool {
        self.get(column_id).is_some()
    }

    /// Columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the board has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

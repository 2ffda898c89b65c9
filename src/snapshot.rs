//! Read-only view of the engine handed to the presentation layer.

use serde::Serialize;

use crate::board::Column;
use crate::card::CardName;
use crate::drag::{DragItem, DropZone};

/// Everything the presentation layer needs to render one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Palette names in display order.
    pub palette: Vec<CardName>,
    /// Columns in display order.
    pub columns: Vec<Column>,
    /// Whether the clear button is waiting for confirmation.
    pub confirming_reset: bool,
    /// The card in flight, if any.
    pub drag: Option<DragItem>,
    /// The drop target under the pointer, if any.
    pub drop_zone: Option<DropZone>,
}

use serde_json::json;
use uuid::Uuid;

use super::*;

#[test]
fn from_palette_sets_palette_source() {
    let item = DragItem::from_palette(CardName::Ai);
    assert_eq!(item.name, CardName::Ai);
    assert_eq!(item.source, DragSource::Palette);
}

#[test]
fn from_board_records_origin() {
    let column = Uuid::new_v4();
    let card = Uuid::new_v4();
    let item = DragItem::from_board(CardName::Quizzes, column, Row::Mechanics, card);
    assert_eq!(item.source, DragSource::Board { column, row: Row::Mechanics, card });
}

#[test]
fn drag_source_serializes_tagged() {
    let value = serde_json::to_value(DragSource::Palette).unwrap();
    assert_eq!(value, json!({ "type": "palette" }));

    let column = Uuid::new_v4();
    let card = Uuid::new_v4();
    let value = serde_json::to_value(DragSource::Board { column, row: Row::Strategy, card }).unwrap();
    assert_eq!(value["type"], "board");
    assert_eq!(value["row"], "Strategy");
    assert_eq!(value["column"], column.to_string());
}

// =============================================================
// DropZone
// =============================================================

#[test]
fn header_target_is_new_column_regardless_of_column() {
    assert_eq!(DropZone::for_target(None, Row::HEADER), Some(DropZone::NewColumn));
    assert_eq!(DropZone::for_target(Some(Uuid::new_v4()), Row::HEADER), Some(DropZone::NewColumn));
}

#[test]
fn ordinary_target_needs_column() {
    assert_eq!(DropZone::for_target(None, Row::Strategy), None);
    let column = Uuid::new_v4();
    assert_eq!(
        DropZone::for_target(Some(column), Row::UserExperience),
        Some(DropZone::Cell { column, category: Category::UserExperience })
    );
}

#[test]
fn zone_column_accessor() {
    let column = Uuid::new_v4();
    assert_eq!(DropZone::NewColumn.column(), None);
    assert_eq!(DropZone::Cell { column, category: Category::Mechanics }.column(), Some(column));
}

#[test]
fn drop_zone_serializes_snake_case_tag() {
    let value = serde_json::to_value(DropZone::NewColumn).unwrap();
    assert_eq!(value, json!({ "type": "new_column" }));
}

use super::*;

// =============================================================
// Row
// =============================================================

#[test]
fn header_is_first_row() {
    assert_eq!(Row::ALL[0], Row::HEADER);
    assert!(Row::HEADER.is_header());
    assert_eq!(Row::HEADER.label(), "Learning Approach");
}

#[test]
fn only_header_lacks_category() {
    let without: Vec<Row> = Row::ALL.into_iter().filter(|r| r.category().is_none()).collect();
    assert_eq!(without, vec![Row::LearningApproach]);
}

#[test]
fn ordinary_rows_are_not_header() {
    for row in &Row::ALL[1..] {
        assert!(!row.is_header());
    }
}

#[test]
fn parse_every_row_label() {
    for row in Row::ALL {
        assert_eq!(row.label().parse::<Row>(), Ok(row));
    }
}

#[test]
fn parse_unknown_row_errors() {
    let err = "Budget".parse::<Row>().unwrap_err();
    assert_eq!(err.to_string(), "unknown row label: Budget");
}

#[test]
fn row_serde_uses_label() {
    let json = serde_json::to_string(&Row::ThemeAndExamples).unwrap();
    assert_eq!(json, "\"Theme & Examples\"");
    let back: Row = serde_json::from_str("\"User Experience\"").unwrap();
    assert_eq!(back, Row::UserExperience);
}

// =============================================================
// Category
// =============================================================

#[test]
fn category_order_follows_rows() {
    let rows: Vec<Row> = Category::ALL.into_iter().map(Category::row).collect();
    assert_eq!(rows, Row::ALL[1..].to_vec());
}

#[test]
fn category_index_matches_position() {
    for (i, category) in Category::ALL.into_iter().enumerate() {
        assert_eq!(category.index(), i);
    }
}

#[test]
fn category_row_roundtrip() {
    for category in Category::ALL {
        assert_eq!(category.row().category(), Some(category));
        assert_eq!(Row::from(category), category.row());
    }
}

#[test]
fn category_label_matches_row_label() {
    assert_eq!(Category::Mechanics.to_string(), "Mechanics");
    assert_eq!(Category::ThemeAndExamples.label(), Row::ThemeAndExamples.label());
}

#[test]
fn category_serde_matches_row_serde() {
    for category in Category::ALL {
        assert_eq!(
            serde_json::to_string(&category).unwrap(),
            serde_json::to_string(&category.row()).unwrap()
        );
    }
}

#[test]
fn parse_every_category_label() {
    for category in Category::ALL {
        assert_eq!(category.label().parse::<Category>(), Ok(category));
    }
}

#[test]
fn parse_category_rejects_header_and_unknown() {
    assert_eq!(
        "Learning Approach".parse::<Category>(),
        Err(ParseRowError::Unknown("Learning Approach".to_owned()))
    );
    assert_eq!("Budget".parse::<Category>(), Err(ParseRowError::Unknown("Budget".to_owned())));
}

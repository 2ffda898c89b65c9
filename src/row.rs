//! Row vocabulary.
//!
//! The board has one header row, `Learning Approach`, whose drop zone creates
//! columns, followed by four ordinary rows that hold cards inside an existing
//! column. `Row` names any of the five; `Category` names only the ordinary
//! ones, so a column's cells can be indexed without a header case.

#[cfg(test)]
#[path = "row_test.rs"]
mod row_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a label does not name a known row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseRowError {
    #[error("unknown row label: {0}")]
    Unknown(String),
}

/// Any row of the board, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Row {
    /// Header row; dropping here creates a column.
    #[serde(rename = "Learning Approach")]
    LearningApproach,
    #[serde(rename = "Strategy")]
    Strategy,
    #[serde(rename = "Mechanics")]
    Mechanics,
    #[serde(rename = "User Experience")]
    UserExperience,
    #[serde(rename = "Theme & Examples")]
    ThemeAndExamples,
}

impl Row {
    /// All rows, header first.
    pub const ALL: [Self; 5] = [
        Self::LearningApproach,
        Self::Strategy,
        Self::Mechanics,
        Self::UserExperience,
        Self::ThemeAndExamples,
    ];

    /// The distinguished column-creating row.
    pub const HEADER: Self = Self::LearningApproach;

    /// Whether this is the header row.
    #[must_use]
    pub fn is_header(self) -> bool {
        self == Self::HEADER
    }

    /// The ordinary category for this row, or `None` for the header.
    #[must_use]
    pub fn category(self) -> Option<Category> {
        match self {
            Self::LearningApproach => None,
            Self::Strategy => Some(Category::Strategy),
            Self::Mechanics => Some(Category::Mechanics),
            Self::UserExperience => Some(Category::UserExperience),
            Self::ThemeAndExamples => Some(Category::ThemeAndExamples),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LearningApproach => "Learning Approach",
            Self::Strategy => "Strategy",
            Self::Mechanics => "Mechanics",
            Self::UserExperience => "User Experience",
            Self::ThemeAndExamples => "Theme & Examples",
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Row {
    type Err = ParseRowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|row| row.label() == s)
            .ok_or_else(|| ParseRowError::Unknown(s.to_owned()))
    }
}

impl From<Category> for Row {
    fn from(category: Category) -> Self {
        category.row()
    }
}

/// An ordinary (non-header) row that receives cards within a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Strategy")]
    Strategy,
    #[serde(rename = "Mechanics")]
    Mechanics,
    #[serde(rename = "User Experience")]
    UserExperience,
    #[serde(rename = "Theme & Examples")]
    ThemeAndExamples,
}

impl Category {
    /// Number of ordinary categories.
    pub const COUNT: usize = 4;

    /// All ordinary categories in display order.
    pub const ALL: [Self; 4] = [Self::Strategy, Self::Mechanics, Self::UserExperience, Self::ThemeAndExamples];

    /// Position within [`Category::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Strategy => 0,
            Self::Mechanics => 1,
            Self::UserExperience => 2,
            Self::ThemeAndExamples => 3,
        }
    }

    /// The board row this category occupies.
    #[must_use]
    pub fn row(self) -> Row {
        match self {
            Self::Strategy => Row::Strategy,
            Self::Mechanics => Row::Mechanics,
            Self::UserExperience => Row::UserExperience,
            Self::ThemeAndExamples => Row::ThemeAndExamples,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.row().label()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseRowError;

    /// Parses an ordinary row label. The header label is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Row>()?.category().ok_or_else(|| ParseRowError::Unknown(s.to_owned()))
    }
}

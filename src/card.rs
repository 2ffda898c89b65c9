//! Card vocabulary and placed card instances.
//!
//! `CardName` is the closed set of concept labels shown in the palette. A
//! `Card` is one placed instance of a name on the board; every drop mints a
//! new `Card` with a fresh id, so the same name may appear any number of
//! times.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a placed card.
pub type CardId = Uuid;

/// Error returned when a label does not name a known card.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCardError {
    #[error("unknown card label: {0}")]
    Unknown(String),
}

/// One of the fixed concept card labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardName {
    #[serde(rename = "Game based Learning")]
    GameBasedLearning,
    #[serde(rename = "Skills Mastery")]
    SkillsMastery,
    #[serde(rename = "Retention")]
    Retention,
    #[serde(rename = "Avatar/Character")]
    AvatarCharacter,
    #[serde(rename = "Branching Story")]
    BranchingStory,
    #[serde(rename = "Challenges")]
    Challenges,
    #[serde(rename = "Learning by Failure")]
    LearningByFailure,
    #[serde(rename = "Decisions")]
    Decisions,
    #[serde(rename = "VR")]
    Vr,
    #[serde(rename = "AR")]
    Ar,
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "Lego Serious Play")]
    LegoSeriousPlay,
    #[serde(rename = "Flight Simulator")]
    FlightSimulator,
    #[serde(rename = "SimCity Game")]
    SimCityGame,
    #[serde(rename = "Gamification")]
    Gamification,
    #[serde(rename = "Behavior Change")]
    BehaviorChange,
    #[serde(rename = "Motivation")]
    Motivation,
    #[serde(rename = "Points & Badges")]
    PointsAndBadges,
    #[serde(rename = "Progress Bar")]
    ProgressBar,
    #[serde(rename = "Quizzes")]
    Quizzes,
    #[serde(rename = "Competition")]
    Competition,
    #[serde(rename = "Ranking")]
    Ranking,
    #[serde(rename = "Starbucks Reward")]
    StarbucksReward,
    #[serde(rename = "LinkedIn Profile Strength")]
    LinkedInProfileStrength,
    #[serde(rename = "Flight Miles Program")]
    FlightMilesProgram,
}

impl CardName {
    /// Every card name in canonical (unshuffled) order.
    pub const ALL: [Self; 25] = [
        Self::GameBasedLearning,
        Self::SkillsMastery,
        Self::Retention,
        Self::AvatarCharacter,
        Self::BranchingStory,
        Self::Challenges,
        Self::LearningByFailure,
        Self::Decisions,
        Self::Vr,
        Self::Ar,
        Self::Ai,
        Self::LegoSeriousPlay,
        Self::FlightSimulator,
        Self::SimCityGame,
        Self::Gamification,
        Self::BehaviorChange,
        Self::Motivation,
        Self::PointsAndBadges,
        Self::ProgressBar,
        Self::Quizzes,
        Self::Competition,
        Self::Ranking,
        Self::StarbucksReward,
        Self::LinkedInProfileStrength,
        Self::FlightMilesProgram,
    ];

    /// Display label, identical to the serialized form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GameBasedLearning => "Game based Learning",
            Self::SkillsMastery => "Skills Mastery",
            Self::Retention => "Retention",
            Self::AvatarCharacter => "Avatar/Character",
            Self::BranchingStory => "Branching Story",
            Self::Challenges => "Challenges",
            Self::LearningByFailure => "Learning by Failure",
            Self::Decisions => "Decisions",
            Self::Vr => "VR",
            Self::Ar => "AR",
            Self::Ai => "AI",
            Self::LegoSeriousPlay => "Lego Serious Play",
            Self::FlightSimulator => "Flight Simulator",
            Self::SimCityGame => "SimCity Game",
            Self::Gamification => "Gamification",
            Self::BehaviorChange => "Behavior Change",
            Self::Motivation => "Motivation",
            Self::PointsAndBadges => "Points & Badges",
            Self::ProgressBar => "Progress Bar",
            Self::Quizzes => "Quizzes",
            Self::Competition => "Competition",
            Self::Ranking => "Ranking",
            Self::StarbucksReward => "Starbucks Reward",
            Self::LinkedInProfileStrength => "LinkedIn Profile Strength",
            Self::FlightMilesProgram => "Flight Miles Program",
        }
    }
}

impl fmt::Display for CardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CardName {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.label() == s)
            .ok_or_else(|| ParseCardError::Unknown(s.to_owned()))
    }
}

/// A card instance placed on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Identifier minted when the card was dropped.
    pub id: CardId,
    /// Which concept this card shows.
    pub name: CardName,
}

impl Card {
    /// Mint a new instance of `name` with a fresh id.
    #[must_use]
    pub fn new(name: CardName) -> Self {
        Self { id: Uuid::new_v4(), name }
    }
}

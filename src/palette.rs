//! Palette of reusable card templates.
//!
//! Built once per session as a uniform shuffle of the full vocabulary and
//! never mutated afterwards. Dragging from the palette copies a name; it
//! never removes one.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::card::CardName;

/// Ordered, immutable list of card names offered for dragging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    names: Vec<CardName>,
}

impl Palette {
    /// Every card name in a random order drawn from the thread RNG.
    #[must_use]
    pub fn shuffled() -> Self {
        Self::shuffled_with(&mut rand::rng())
    }

    /// Every card name in a random order drawn from `rng`.
    #[must_use]
    pub fn shuffled_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut names = CardName::ALL.to_vec();
        names.shuffle(rng);
        Self { names }
    }

    /// Names in display order.
    #[must_use]
    pub fn names(&self) -> &[CardName] {
        &self.names
    }

    /// Name at a palette position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<CardName> {
        self.names.get(index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::shuffled()
    }
}

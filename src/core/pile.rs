//! Pile identity and contents.
//!
//! A Klondike table always has the same 13 piles, so pile ids are fixed:
//!
//! | Id     | Pile           |
//! |--------|----------------|
//! | 0      | Stock          |
//! | 1      | Discard        |
//! | 2..=5  | Foundation 0-3 |
//! | 6..=12 | Tableau 0-6    |

use serde::{Deserialize, Serialize};

use super::card::CardId;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Number of tableau piles.
pub const TABLEAU_COUNT: usize = 7;

/// Total number of piles on the table.
pub const PILE_COUNT: usize = 2 + FOUNDATION_COUNT + TABLEAU_COUNT;

/// Semantic role of a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileType {
    /// Face-down draw pile.
    Stock,
    /// Face-up waste fed from the stock.
    Discard,
    /// Builds one suit upward from Ace.
    Foundation,
    /// Builds downward in alternating colors.
    Tableau,
}

impl std::fmt::Display for PileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PileType::Stock => "Stock",
            PileType::Discard => "Discard",
            PileType::Foundation => "Foundation",
            PileType::Tableau => "Tableau",
        };
        f.write_str(name)
    }
}

/// Pile identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PileId(pub u8);

impl PileId {
    pub const STOCK: PileId = PileId(0);
    pub const DISCARD: PileId = PileId(1);

    /// Id of foundation `index` (0-3).
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub const fn foundation(index: usize) -> Self {
        assert!(index < FOUNDATION_COUNT, "Foundation index out of range");
        Self(2 + index as u8)
    }

    /// Id of tableau `index` (0-6).
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub const fn tableau(index: usize) -> Self {
        assert!(index < TABLEAU_COUNT, "Tableau index out of range");
        Self(2 + FOUNDATION_COUNT as u8 + index as u8)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Position of this pile in table order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Pile type implied by the fixed id layout.
    ///
    /// Returns `None` for ids outside the table.
    #[must_use]
    pub const fn pile_type(self) -> Option<PileType> {
        match self.0 {
            0 => Some(PileType::Stock),
            1 => Some(PileType::Discard),
            2..=5 => Some(PileType::Foundation),
            6..=12 => Some(PileType::Tableau),
            _ => None,
        }
    }

    /// Iterate all pile ids in table order.
    pub fn all() -> impl Iterator<Item = PileId> {
        (0..PILE_COUNT as u8).map(PileId)
    }

    /// Iterate the foundation ids.
    pub fn foundations() -> impl Iterator<Item = PileId> {
        (0..FOUNDATION_COUNT).map(PileId::foundation)
    }

    /// Iterate the tableau ids.
    pub fn tableaus() -> impl Iterator<Item = PileId> {
        (0..TABLEAU_COUNT).map(PileId::tableau)
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile({})", self.0)
    }
}

/// An ordered, named stack of cards.
///
/// Index 0 is the bottom card, the last element is the top card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pile {
    pub id: PileId,
    pub pile_type: PileType,
    /// Display label ("Tableau 3").
    pub name: String,
    /// Stacking gap between cards, for the presentation layer only.
    pub gap: f32,
    cards: Vec<CardId>,
}

impl Pile {
    /// Create an empty pile.
    pub fn new(id: PileId, pile_type: PileType, name: impl Into<String>, gap: f32) -> Self {
        Self {
            id,
            pile_type,
            name: name.into(),
            gap,
            cards: Vec::new(),
        }
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Position of `card` in this pile (0 = bottom).
    #[must_use]
    pub fn position(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    pub(crate) fn push(&mut self, card: CardId) {
        self.cards.push(card);
    }

    pub(crate) fn pop(&mut self) -> Option<CardId> {
        self.cards.pop()
    }

    pub(crate) fn split_off(&mut self, at: usize) -> Vec<CardId> {
        self.cards.split_off(at)
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }
}

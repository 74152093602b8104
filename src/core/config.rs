//! Game configuration types.
//!
//! The table layout itself is fixed (1 stock, 1 discard, 4 foundations,
//! 7 tableaus), but games configure:
//! - `PileConfig`: pile labels and stacking gaps for the presentation layer
//! - `DropPrecedence`: which pile family wins when a drop hits several
//! - `GameConfig`: seed, undo history limit, and the above

use serde::{Deserialize, Serialize};

use super::pile::{PileId, PileType, FOUNDATION_COUNT, TABLEAU_COUNT};

/// Default stacking gap for stock and discard piles.
pub const STOCK_GAP: f32 = 1.0;

/// Default stacking gap for foundation piles.
pub const FOUNDATION_GAP: f32 = 0.0;

/// Default stacking gap for tableau piles.
pub const TABLEAU_GAP: f32 = 30.0;

/// Configuration for a single pile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PileConfig {
    /// Unique identifier for this pile.
    pub id: PileId,

    /// Semantic role of the pile.
    pub pile_type: PileType,

    /// Human-readable name (for debugging/display).
    pub name: String,

    /// Stacking gap between cards. Presentation hint only; no rule reads it.
    pub gap: f32,
}

impl PileConfig {
    /// Create a pile configuration with the default gap for its type.
    pub fn new(id: PileId, pile_type: PileType, name: impl Into<String>) -> Self {
        let gap = match pile_type {
            PileType::Stock | PileType::Discard => STOCK_GAP,
            PileType::Foundation => FOUNDATION_GAP,
            PileType::Tableau => TABLEAU_GAP,
        };
        Self {
            id,
            pile_type,
            name: name.into(),
            gap,
        }
    }

    /// Set the stacking gap.
    #[must_use]
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }
}

/// Destination precedence when a dropped card is valid on several piles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropPrecedence {
    /// Try tableau piles, then foundations.
    #[default]
    TableauFirst,
    /// Try foundations, then tableau piles.
    FoundationFirst,
}

impl DropPrecedence {
    /// Pile families in the order they are tried.
    #[must_use]
    pub const fn order(self) -> [PileType; 2] {
        match self {
            DropPrecedence::TableauFirst => [PileType::Tableau, PileType::Foundation],
            DropPrecedence::FoundationFirst => [PileType::Foundation, PileType::Tableau],
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for deck shuffling. Same seed produces the same deals.
    pub seed: u64,

    /// Pile configurations in table order.
    pub piles: Vec<PileConfig>,

    /// Maximum undo history. `None` keeps every move.
    pub undo_limit: Option<usize>,

    /// Resolution order for ambiguous drops.
    pub precedence: DropPrecedence,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

impl GameConfig {
    /// Create the standard Klondike configuration.
    pub fn new(seed: u64) -> Self {
        let mut piles = Vec::with_capacity(2 + FOUNDATION_COUNT + TABLEAU_COUNT);
        piles.push(PileConfig::new(PileId::STOCK, PileType::Stock, "Stock"));
        piles.push(PileConfig::new(PileId::DISCARD, PileType::Discard, "Discard"));
        for i in 0..FOUNDATION_COUNT {
            piles.push(PileConfig::new(
                PileId::foundation(i),
                PileType::Foundation,
                format!("Foundation {}", i),
            ));
        }
        for i in 0..TABLEAU_COUNT {
            piles.push(PileConfig::new(
                PileId::tableau(i),
                PileType::Tableau,
                format!("Tableau {}", i),
            ));
        }

        Self {
            seed,
            piles,
            undo_limit: None,
            precedence: DropPrecedence::default(),
        }
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Bound the undo history.
    #[must_use]
    pub fn with_undo_limit(mut self, limit: usize) -> Self {
        self.undo_limit = Some(limit);
        self
    }

    /// Set the drop precedence.
    #[must_use]
    pub fn with_precedence(mut self, precedence: DropPrecedence) -> Self {
        self.precedence = precedence;
        self
    }

    /// Override the gap of every pile of one type.
    #[must_use]
    pub fn with_gap(mut self, pile_type: PileType, gap: f32) -> Self {
        for pile in self.piles.iter_mut().filter(|p| p.pile_type == pile_type) {
            pile.gap = gap;
        }
        self
    }

    /// Get a pile config by ID.
    #[must_use]
    pub fn get_pile(&self, id: PileId) -> Option<&PileConfig> {
        self.piles.iter().find(|p| p.id == id)
    }
}

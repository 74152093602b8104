//! Recorded reversals.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::CardId;
use crate::core::pile::PileId;

/// Who initiated a recorded move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UndoOwner {
    /// A click or drag by the player.
    User,
    /// A move the engine made on its own (auto-play, hints).
    System,
}

/// Unique identifier for an undo entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UndoEntryId(pub u32);

impl UndoEntryId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for UndoEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Undo({})", self.0)
    }
}

/// Everything needed to reverse one committed move.
///
/// Each variant is self-contained: it names the cards and piles
/// involved, so reversal never depends on anything recorded later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UndoAction {
    /// `card` was turned over from the stock onto the discard pile.
    StockDraw { card: CardId },

    /// `card` left the discard pile for `dest`.
    DiscardReturn { card: CardId, dest: PileId },

    /// `cards` (bottom to top) moved from `source` to `dest`.
    PileMove {
        source: PileId,
        dest: PileId,
        cards: SmallVec<[CardId; 13]>,
        /// Face state of each moved card before the move.
        face_up: SmallVec<[bool; 13]>,
        /// Card on `source` turned face-up by the move.
        exposed: Option<CardId>,
    },

    /// `count` discard cards were recycled into the stock.
    StockRefill { count: usize },
}

impl UndoAction {
    /// Number of cards the reversal moves.
    #[must_use]
    pub fn card_count(&self) -> usize {
        match self {
            UndoAction::StockDraw { .. } | UndoAction::DiscardReturn { .. } => 1,
            UndoAction::PileMove { cards, .. } => cards.len(),
            UndoAction::StockRefill { count } => *count,
        }
    }
}

/// One entry on the undo stack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoEntry {
    pub id: UndoEntryId,
    pub owner: UndoOwner,
    pub action: UndoAction,
    /// Description of the original move.
    pub description: String,
}

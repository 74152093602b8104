//! Move reports returned to the presentation layer.
//!
//! Every committed move (and every undo) yields a `MoveReport`: which
//! cards moved where, which cards changed face, and a human-readable
//! description suitable for a status line or log.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::CardId;
use super::pile::PileId;

/// What kind of change a report describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// A stock card turned over onto the discard pile.
    Draw,
    /// A card or run placed on a foundation or tableau pile.
    Place,
    /// The discard pile recycled into the stock.
    Refill,
    /// The most recent move reversed.
    Undo,
}

/// Outcome of a committed move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub kind: MoveKind,

    /// Pile the cards left.
    pub source: PileId,

    /// Pile the cards landed on.
    pub dest: PileId,

    /// Moved cards, in their new bottom-to-top order.
    pub cards: Vec<CardId>,

    /// Cards whose face state changed.
    /// SmallVec covers the common case (one exposure) without heap allocation.
    pub flipped: SmallVec<[CardId; 2]>,

    /// Status message, e.g. "Placed Ace of Spades to the foundation."
    pub description: String,
}

impl MoveReport {
    /// Create a report with no flips.
    #[must_use]
    pub fn new(
        kind: MoveKind,
        source: PileId,
        dest: PileId,
        cards: Vec<CardId>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            source,
            dest,
            cards,
            flipped: SmallVec::new(),
            description: description.into(),
        }
    }

    /// Add a flipped card.
    #[must_use]
    pub fn with_flipped(mut self, card: CardId) -> Self {
        self.flipped.push(card);
        self
    }

    /// Number of moved cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}

impl std::fmt::Display for MoveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    #[test]
    fn test_report_builder() {
        let ace = CardId::of(Rank::ACE, Suit::Spades);
        let exposed = CardId::of(Rank::new(9), Suit::Hearts);

        let report = MoveReport::new(
            MoveKind::Place,
            PileId::tableau(2),
            PileId::foundation(0),
            vec![ace],
            "Placed Ace of Spades to the foundation.",
        )
        .with_flipped(exposed);

        assert_eq!(report.card_count(), 1);
        assert_eq!(report.flipped.as_slice(), &[exposed]);
        assert_eq!(format!("{}", report), "Placed Ace of Spades to the foundation.");
    }

    #[test]
    fn test_report_serialization() {
        let report = MoveReport::new(
            MoveKind::Refill,
            PileId::DISCARD,
            PileId::STOCK,
            vec![CardId(3), CardId(17)],
            "Stock refilled from discard pile.",
        );
        let json = serde_json::to_string(&report).unwrap();
        let deserialized: MoveReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}

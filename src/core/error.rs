//! Reasons a user request is rejected.
//!
//! Rejections never mutate state. Contract violations inside the engine
//! (applying an unvalidated move, reversing a stale undo action) are
//! panics, not `MoveError`s.

use super::card::CardId;
use super::pile::PileId;

/// Why a click, drag or drop was refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The card id is not one of the 52 cards on the table.
    UnknownCard(CardId),
    /// The pile id is not one of the 13 piles.
    UnknownPile(PileId),
    /// Face-down cards cannot be picked up.
    CardFaceDown(CardId),
    /// The card cannot be dragged from where it lies.
    NotDraggable(CardId),
    /// The cards above the dragged card do not form a valid run.
    BrokenRun(CardId),
    /// Source and destination are the same pile.
    SamePile(PileId),
    /// The destination does not accept the card.
    IllegalDestination { card: CardId, dest: PileId },
    /// None of the candidate piles accepts the card.
    NoValidDestination(CardId),
    /// Only single cards may be placed on a foundation.
    RunToFoundation { card: CardId, len: usize },
    /// Only the top stock card can be turned over.
    StockNotTop(CardId),
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::UnknownCard(card) => write!(f, "unknown card id {}", card.raw()),
            MoveError::UnknownPile(pile) => write!(f, "unknown pile {}", pile),
            MoveError::CardFaceDown(card) => write!(f, "{} is face down", card),
            MoveError::NotDraggable(card) => write!(f, "{} cannot be dragged", card),
            MoveError::BrokenRun(card) => write!(f, "cards above {} do not form a run", card),
            MoveError::SamePile(pile) => write!(f, "source and destination are both {}", pile),
            MoveError::IllegalDestination { card, dest } => {
                write!(f, "{} cannot be placed on {}", card, dest)
            }
            MoveError::NoValidDestination(card) => write!(f, "no valid destination for {}", card),
            MoveError::RunToFoundation { card, len } => {
                write!(f, "run of {} cards starting at {} cannot go to a foundation", len, card)
            }
            MoveError::StockNotTop(card) => write!(f, "{} is not the top stock card", card),
        }
    }
}

impl std::error::Error for MoveError {}

//! Reversal dispatcher.

use log::trace;
use smallvec::SmallVec;

use crate::core::action::{MoveKind, MoveReport};
use crate::core::card::CardId;
use crate::core::pile::PileId;
use crate::moves::StockCycle;
use crate::piles::Table;

use super::action::UndoAction;

/// Reverse `action` on `table`.
///
/// The table must be in the state the original move left it in: the
/// moved cards on top of their destination. Anything else is a stale or
/// corrupted action and panics.
pub fn apply_reverse(action: &UndoAction, table: &mut Table, description: impl Into<String>) -> MoveReport {
    trace!("Reversing {:?}", action);
    match action {
        UndoAction::StockDraw { card } => {
            assert_on_top(table, PileId::DISCARD, &[*card]);
            table.piles_mut().move_top(PileId::DISCARD, PileId::STOCK);
            table.set_face_up(*card, false);
            MoveReport::new(MoveKind::Undo, PileId::DISCARD, PileId::STOCK, vec![*card], description)
                .with_flipped(*card)
        }

        UndoAction::DiscardReturn { card, dest } => {
            assert_on_top(table, *dest, &[*card]);
            table.piles_mut().move_top(*dest, PileId::DISCARD);
            MoveReport::new(MoveKind::Undo, *dest, PileId::DISCARD, vec![*card], description)
        }

        UndoAction::PileMove { source, dest, cards, face_up, exposed } => {
            assert_on_top(table, *dest, cards);
            let mut flipped: SmallVec<[CardId; 2]> = SmallVec::new();

            if let Some(exposed) = exposed {
                assert_on_top(table, *source, &[*exposed]);
                if table.set_face_up(*exposed, false) {
                    flipped.push(*exposed);
                }
            }

            let at = table.piles().pile_size(*dest) - cards.len();
            let moved = table.piles_mut().move_run(*dest, at, *source);
            for (card, &up) in moved.iter().zip(face_up.iter()) {
                if table.set_face_up(*card, up) {
                    flipped.push(*card);
                }
            }

            let mut report = MoveReport::new(MoveKind::Undo, *dest, *source, moved, description);
            report.flipped = flipped;
            report
        }

        UndoAction::StockRefill { count } => {
            assert!(
                table.piles().pile_size(PileId::DISCARD) == 0,
                "Discard pile must be empty to reverse a refill"
            );
            let moved = StockCycle::unrefill(table, *count);
            let mut report = MoveReport::new(MoveKind::Undo, PileId::STOCK, PileId::DISCARD, Vec::new(), description);
            report.flipped = moved.iter().copied().collect();
            report.cards = moved;
            report
        }
    }
}

fn assert_on_top(table: &Table, pile: PileId, cards: &[CardId]) {
    assert!(
        table.piles().get(pile).is_some_and(|p| p.cards().ends_with(cards)),
        "Cannot reverse: {:?} not on top of {}",
        cards,
        pile
    );
}

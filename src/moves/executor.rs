//! Committing validated moves to the table.
//!
//! `MoveExecutor` never validates: callers check the move against a
//! [`crate::rules::RulesEngine`] first. Structural contract violations
//! (a run that is not the top of its source pile) panic.

use log::trace;

use crate::core::card::CardId;
use crate::core::pile::{PileId, PileType};
use crate::piles::Table;

/// What `MoveExecutor::apply` changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    /// Moved cards, bottom to top.
    pub cards: Vec<CardId>,
    /// Tableau card turned face-up because the move exposed it.
    pub exposed: Option<CardId>,
}

/// Stateless mover for runs and stock draws.
pub struct MoveExecutor;

impl MoveExecutor {
    /// Move `run` from the top of `source` onto `dest`.
    ///
    /// Order and face state of the run are preserved. If `source` is a
    /// tableau pile whose new top card is face-down, that card is turned
    /// face-up. Stock and discard piles never flip their new top.
    ///
    /// Panics if `run` is empty or is not the top of `source`.
    pub fn apply(table: &mut Table, run: &[CardId], source: PileId, dest: PileId) -> AppliedMove {
        assert!(!run.is_empty(), "Cannot apply an empty run");
        let source_len = table.piles().pile_size(source);
        assert!(
            table.piles()[source].cards().ends_with(run),
            "Run {:?} is not the top of {}",
            run,
            source
        );

        let at = source_len - run.len();
        let cards = table.piles_mut().move_run(source, at, dest);
        trace!("Moved {} card(s) from {} to {}", cards.len(), source, dest);

        let exposed = Self::expose_top(table, source);
        AppliedMove { cards, exposed }
    }

    /// Turn the top stock card over onto the discard pile.
    ///
    /// Returns the drawn card, or `None` if the stock is empty.
    pub fn draw(table: &mut Table) -> Option<CardId> {
        let card = table.piles_mut().move_top(PileId::STOCK, PileId::DISCARD)?;
        table.set_face_up(card, true);
        trace!("Drew {:?} from the stock", card);
        Some(card)
    }

    /// Flip the top of a tableau pile face-up if it is face-down.
    fn expose_top(table: &mut Table, pile: PileId) -> Option<CardId> {
        if table.pile(pile).map(|p| p.pile_type) != Some(PileType::Tableau) {
            return None;
        }
        let top = table.piles().top_card(pile)?;
        table.set_face_up(top, true).then_some(top)
    }
}

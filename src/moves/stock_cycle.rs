//! Recycling the discard pile back into the stock.

use log::info;

use crate::core::card::CardId;
use crate::core::pile::PileId;
use crate::piles::Table;

/// Stock refill from the discard pile.
pub struct StockCycle;

impl StockCycle {
    /// Whether a refill would do anything useful: the stock is empty and
    /// the discard pile is not.
    #[must_use]
    pub fn can_refill(table: &Table) -> bool {
        table.piles().pile_size(PileId::STOCK) == 0 && table.piles().pile_size(PileId::DISCARD) > 0
    }

    /// Move every discard card onto the stock in reverse order, face-down.
    ///
    /// Afterwards the stock (bottom to top) is the old discard pile
    /// reversed, so the next draw yields the card that was drawn first.
    /// With an empty discard pile this is a no-op.
    ///
    /// Returns the moved cards in their new stock order, bottom to top.
    pub fn refill(table: &mut Table) -> Vec<CardId> {
        let mut moved = Vec::with_capacity(table.piles().pile_size(PileId::DISCARD));
        while let Some(card) = table.piles_mut().move_top(PileId::DISCARD, PileId::STOCK) {
            table.set_face_up(card, false);
            moved.push(card);
        }

        if !moved.is_empty() {
            info!("Stock refilled from discard pile ({} cards).", moved.len());
        }
        moved
    }

    /// Reverse a refill of `count` cards: the top `count` stock cards go
    /// back to the discard pile face-up, restoring its original order.
    ///
    /// Panics if the stock holds fewer than `count` cards.
    pub fn unrefill(table: &mut Table, count: usize) -> Vec<CardId> {
        let available = table.piles().pile_size(PileId::STOCK);
        assert!(
            count <= available,
            "Cannot return {} cards to the discard pile, stock holds {}",
            count,
            available
        );

        let mut moved = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(card) = table.piles_mut().move_top(PileId::STOCK, PileId::DISCARD) {
                table.set_face_up(card, true);
                moved.push(card);
            }
        }
        moved
    }
}

//! Klondike placement rules and terminal checks.
//!
//! Foundations build one suit upward from Ace. Tableau piles build
//! downward in alternating colors, and only a King may start an empty
//! tableau pile. Nothing may be placed on the stock or the discard pile.

use crate::core::card::{Card, Rank, DECK_SIZE, RANKS_PER_SUIT};
use crate::core::pile::{PileId, PileType};
use crate::piles::Table;

use super::engine::{GameResult, RulesEngine};

/// Standard Klondike rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KlondikeRules;

impl RulesEngine for KlondikeRules {
    fn is_move_valid(&self, card: &Card, dest: PileType, dest_top: Option<&Card>) -> bool {
        is_move_valid(card, dest, dest_top)
    }

    fn is_terminal(&self, table: &Table) -> Option<GameResult> {
        is_won(table).then_some(GameResult::Won)
    }
}

/// Whether `card` may be placed on a foundation whose top is `top`.
#[must_use]
pub fn can_place_on_foundation(card: &Card, top: Option<&Card>) -> bool {
    match top {
        None => card.rank == Rank::ACE,
        Some(top) => top.suit == card.suit && top.rank.value() + 1 == card.rank.value(),
    }
}

/// Whether `card` may be placed on a tableau pile whose top is `top`.
#[must_use]
pub fn can_place_on_tableau(card: &Card, top: Option<&Card>) -> bool {
    match top {
        None => card.rank == Rank::KING,
        Some(top) => top.rank.value() == card.rank.value() + 1 && top.is_opposite_color(card),
    }
}

/// Dispatch on the destination family.
#[must_use]
pub fn is_move_valid(card: &Card, dest: PileType, top: Option<&Card>) -> bool {
    match dest {
        PileType::Foundation => can_place_on_foundation(card, top),
        PileType::Tableau => can_place_on_tableau(card, top),
        PileType::Stock | PileType::Discard => false,
    }
}

/// Whether `cards` (bottom to top) are all face-up and each card could
/// be placed on the one below it.
#[must_use]
pub fn is_tableau_run(cards: &[&Card]) -> bool {
    cards.iter().all(|c| c.face_up)
        && cards
            .windows(2)
            .all(|pair| can_place_on_tableau(pair[1], Some(pair[0])))
}

/// Whether the foundation pile holds Ace through King of one suit.
#[must_use]
pub fn is_foundation_complete(table: &Table, pile: PileId) -> bool {
    let cards: Vec<&Card> = table.cards_in(pile).collect();
    cards.len() == RANKS_PER_SUIT as usize
        && cards.first().map_or(false, |c| c.rank == Rank::ACE)
        && cards
            .windows(2)
            .all(|pair| can_place_on_foundation(pair[1], Some(pair[0])))
}

/// All 52 cards sit on the foundations in rank order.
#[must_use]
pub fn is_won(table: &Table) -> bool {
    let on_foundations: usize = PileId::foundations()
        .map(|p| table.piles().pile_size(p))
        .sum();
    on_foundations == DECK_SIZE && PileId::foundations().all(|p| is_foundation_complete(table, p))
}

/// Stock and discard are empty and every tableau card is face-up.
#[must_use]
pub fn is_auto_completable(table: &Table) -> bool {
    table.piles().pile_size(PileId::STOCK) == 0
        && table.piles().pile_size(PileId::DISCARD) == 0
        && PileId::tableaus().all(|p| table.cards_in(p).all(|c| c.face_up))
}

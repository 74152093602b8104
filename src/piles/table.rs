//! The table: pile layout plus per-card face state.

use rustc_hash::FxHashMap;

use crate::core::card::{Card, CardId};
use crate::core::config::PileConfig;
use crate::core::pile::{Pile, PileId, PileType};

use super::PileManager;

/// All piles and all cards of a game.
///
/// Card values (rank, suit, face) are stored here by id; where each card
/// lies is owned by the [`PileManager`].
#[derive(Clone, Debug)]
pub struct Table {
    piles: PileManager,
    cards: FxHashMap<CardId, Card>,
}

impl Table {
    /// Create an empty table.
    #[must_use]
    pub fn new(configs: &[PileConfig]) -> Self {
        Self {
            piles: PileManager::from_config(configs),
            cards: FxHashMap::default(),
        }
    }

    /// Place a card on top of a pile.
    ///
    /// Panics if the card is already on the table.
    pub fn place(&mut self, card: Card, pile: PileId) {
        self.piles.add_to_pile(card.id, pile);
        self.cards.insert(card.id, card);
    }

    /// Pile layout and locations.
    #[must_use]
    pub fn piles(&self) -> &PileManager {
        &self.piles
    }

    pub(crate) fn piles_mut(&mut self) -> &mut PileManager {
        &mut self.piles
    }

    /// Get a pile by ID.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        self.piles.get(id)
    }

    /// Get a card by ID.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get a card, panicking if it is not on the table.
    #[must_use]
    pub fn card_unchecked(&self, id: CardId) -> &Card {
        match self.cards.get(&id) {
            Some(card) => card,
            None => panic!("Card {:?} not on the table", id),
        }
    }

    /// Top card of a pile.
    #[must_use]
    pub fn top(&self, pile: PileId) -> Option<&Card> {
        self.piles.top_card(pile).and_then(|id| self.cards.get(&id))
    }

    /// Type of the pile holding `card`.
    #[must_use]
    pub fn pile_type_of(&self, card: CardId) -> Option<PileType> {
        let pile = self.piles.pile_of(card)?;
        self.piles.get(pile).map(|p| p.pile_type)
    }

    /// Set a card's face state.
    ///
    /// Returns `true` if the state changed.
    pub fn set_face_up(&mut self, id: CardId, face_up: bool) -> bool {
        match self.cards.get_mut(&id) {
            Some(card) if card.face_up != face_up => {
                card.face_up = face_up;
                true
            }
            Some(_) => false,
            None => panic!("Card {:?} not on the table", id),
        }
    }

    /// Cards of a pile, resolved to values, bottom to top.
    pub fn cards_in(&self, pile: PileId) -> impl Iterator<Item = &Card> + '_ {
        self.piles
            .get(pile)
            .map_or(&[][..], Pile::cards)
            .iter()
            .map(move |id| self.card_unchecked(*id))
    }

    /// Number of cards on the table.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.piles.clear();
        self.cards.clear();
    }
}

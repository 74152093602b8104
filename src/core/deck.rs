//! One-shot deck of 52 cards, consumed by the deal.

use super::card::{Card, Rank, Suit, DECK_SIZE};
use super::rng::GameRng;

/// An ordered sequence of all 52 cards.
///
/// The first card is dealt first. Decks are consumed by
/// [`crate::core::GameState::deal_from`] and not kept afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled deck, suit by suit, Ace to King, all face-down.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::all().map(move |rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// Freshly shuffled deck.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::standard();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Build a deck from an explicit order.
    ///
    /// Panics unless `cards` holds each of the 52 cards exactly once.
    /// Face state is reset to face-down.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        assert_eq!(cards.len(), DECK_SIZE, "Deck must hold 52 cards");
        let mut seen = [false; DECK_SIZE];
        for card in &cards {
            let idx = card.id.raw() as usize;
            assert!(idx < DECK_SIZE && !seen[idx], "Deck holds {} twice", card);
            seen[idx] = true;
        }

        let cards = cards.into_iter().map(|c| Card::from_id(c.id)).collect();
        Self { cards }
    }

    /// Cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
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

    /// Consume the deck.
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

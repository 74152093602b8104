//! Card model: ranks, suits, colors and the runtime card.
//!
//! ## ID Layout
//!
//! The 52 cards of a standard deck have fixed ids:
//! `suit_index * 13 + (rank - 1)`, with suits ordered Clubs, Diamonds,
//! Hearts, Spades. Ids are stable across deals; only pile membership and
//! face state change during a game.
//!
//! ```
//! use klondike_engine::core::{CardId, Rank, Suit};
//!
//! let id = CardId::of(Rank::KING, Suit::Spades);
//! assert_eq!(id.raw(), 51);
//! assert_eq!(id.rank(), Rank::KING);
//! assert_eq!(id.suit(), Suit::Spades);
//! ```

use serde::{Deserialize, Serialize};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Card color, used by the alternating-color tableau rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// The four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in id order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Index of this suit within `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Red for Diamonds and Hearts, black for Clubs and Spades.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        };
        f.write_str(name)
    }
}

/// Card rank, 1 (Ace) through 13 (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank.
    ///
    /// Panics if `value` is outside 1..=13.
    #[must_use]
    pub fn new(value: u8) -> Self {
        assert!(
            (1..=RANKS_PER_SUIT).contains(&value),
            "Rank must be between 1 and 13, got {}",
            value
        );
        Self(value)
    }

    /// Numeric value (Ace = 1, King = 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate Ace through King.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=RANKS_PER_SUIT).map(Rank)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => f.write_str("Ace"),
            11 => f.write_str("Jack"),
            12 => f.write_str("Queen"),
            13 => f.write_str("King"),
            n => write!(f, "{}", n),
        }
    }
}

/// Stable identifier of one of the 52 cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Id of the card with the given rank and suit.
    #[must_use]
    pub const fn of(rank: Rank, suit: Suit) -> Self {
        Self(suit.index() * RANKS_PER_SUIT + rank.0 - 1)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Rank encoded in this id.
    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank(self.0 % RANKS_PER_SUIT + 1)
    }

    /// Suit encoded in this id.
    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::ALL[(self.0 / RANKS_PER_SUIT) as usize]
    }

    /// Whether this id names a card of a standard deck.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < DECK_SIZE
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank(), self.suit())
    }
}

/// A card during play.
///
/// Rank and suit never change. `face_up` is flipped by deals, draws,
/// exposures and refills. Which pile the card sits in is tracked by
/// [`crate::piles::PileManager`], not by the card itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub rank: Rank,
    pub suit: Suit,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            id: CardId::of(rank, suit),
            rank,
            suit,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn new_face_up(rank: Rank, suit: Suit) -> Self {
        let mut card = Self::new(rank, suit);
        card.face_up = true;
        card
    }

    /// Rebuild a face-down card from its id.
    #[must_use]
    pub const fn from_id(id: CardId) -> Self {
        Self::new(id.rank(), id.suit())
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Toggle face state.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Whether this card and `other` are of opposite colors.
    #[must_use]
    pub fn is_opposite_color(&self, other: &Card) -> bool {
        self.color() != other.color()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

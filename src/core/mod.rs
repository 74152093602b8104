//! Core engine types: cards, piles, deck, state, reports, RNG, configuration.
//!
//! Everything here is a plain value except `GameState`, which composes
//! the table, the rules and the undo history behind the event API.

pub mod card;
pub mod pile;
pub mod deck;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;
pub mod state;

pub use card::{Card, CardId, Color, Rank, Suit, DECK_SIZE, RANKS_PER_SUIT};
pub use pile::{Pile, PileId, PileType, FOUNDATION_COUNT, PILE_COUNT, TABLEAU_COUNT};
pub use deck::Deck;
pub use rng::{GameRng, GameRngState};
pub use config::{DropPrecedence, GameConfig, PileConfig};
pub use error::MoveError;
pub use action::{MoveKind, MoveReport};
pub use state::{GameState, Run};

//! # klondike-engine
//!
//! A Klondike solitaire rules engine: pile model, move validation,
//! move application, stock recycling and undo.
//!
//! The engine knows nothing about screens. A presentation layer resolves
//! clicks and drags to card and pile ids, calls the event API on
//! [`GameState`], and re-renders from the returned [`MoveReport`].
//!
//! ## Design Principles
//!
//! 1. **Validate, then apply**: a move is checked in full before any pile
//!    changes. Rejections return `MoveError` and mutate nothing.
//!
//! 2. **Exact reversal**: every committed move records an `UndoAction`
//!    with enough information to restore pile order and face state.
//!
//! 3. **Deterministic**: deals come from a seeded ChaCha8 stream.
//!
//! ## Modules
//!
//! - `core`: Cards, piles, deck, RNG, configuration, reports, game state
//! - `piles`: Pile layout and card locations
//! - `rules`: RulesEngine trait and Klondike placement rules
//! - `moves`: Applying runs, stock draws and refills
//! - `undo`: Undo actions, history and reversal
//!
//! ## Usage
//!
//! ```
//! use klondike_engine::{GameConfig, GameState, PileId};
//!
//! let mut game = GameState::new(GameConfig::new(7));
//! let report = game.stock_clicked().unwrap().unwrap();
//! assert_eq!(game.pile_of(report.cards[0]), Some(PileId::DISCARD));
//!
//! game.undo();
//! assert!(game.pile(PileId::DISCARD).unwrap().is_empty());
//! ```

pub mod core;
pub mod piles;
pub mod rules;
pub mod moves;
pub mod undo;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, Color, Rank, Suit,
    Pile, PileId, PileType,
    Deck, GameRng, GameRngState,
    DropPrecedence, GameConfig, PileConfig,
    MoveError, MoveKind, MoveReport,
    GameState, Run,
};

pub use crate::piles::{PileManager, Table};

pub use crate::rules::{GameResult, KlondikeRules, RulesEngine};

pub use crate::moves::{AppliedMove, MoveExecutor, StockCycle};

pub use crate::undo::{apply_reverse, UndoAction, UndoEntry, UndoEntryId, UndoOwner, UndoStack};

//! Move validation and terminal checks.
//!
//! `RulesEngine` is the seam; `KlondikeRules` is the standard game.
//! The free functions in `klondike` are the pure predicates it is
//! built from, usable without a game state.

pub mod engine;
pub mod klondike;

pub use engine::{GameResult, RulesEngine};
pub use klondike::{
    can_place_on_foundation, can_place_on_tableau, is_auto_completable, is_move_valid,
    is_tableau_run, is_won, KlondikeRules,
};

//! Rules engine trait.
//!
//! A `RulesEngine` decides:
//! - Whether a card may land on a pile
//! - Whether a dragged run may land there as a whole
//! - Whether the game is over

use crate::core::card::Card;
use crate::core::pile::PileType;
use crate::piles::Table;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Every card is on the foundations.
    Won,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `is_move_valid`: Pure and deterministic; must not inspect anything
///   but its arguments
/// - `accepts_run`: Called in addition to `is_move_valid` with the run length
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Whether `card` may be placed on a pile of type `dest` whose top
    /// card is `dest_top` (`None` for an empty pile).
    fn is_move_valid(&self, card: &Card, dest: PileType, dest_top: Option<&Card>) -> bool;

    /// Whether a run of `len` cards may move to a pile of type `dest`.
    ///
    /// Default: foundations take single cards only.
    fn accepts_run(&self, len: usize, dest: PileType) -> bool {
        len == 1 || dest != PileType::Foundation
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, table: &Table) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Validate a whole run landing on a pile.
    fn is_run_move_valid(&self, run: &[&Card], dest: PileType, dest_top: Option<&Card>) -> bool {
        match run.first() {
            Some(first) => self.accepts_run(run.len(), dest) && self.is_move_valid(first, dest, dest_top),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    /// Accepts anything; exercises the default methods.
    struct Permissive;

    impl RulesEngine for Permissive {
        fn is_move_valid(&self, _card: &Card, _dest: PileType, _dest_top: Option<&Card>) -> bool {
            true
        }

        fn is_terminal(&self, _table: &Table) -> Option<GameResult> {
            None
        }
    }

    #[test]
    fn test_default_accepts_run() {
        let rules = Permissive;

        assert!(rules.accepts_run(1, PileType::Foundation));
        assert!(!rules.accepts_run(2, PileType::Foundation));
        assert!(rules.accepts_run(5, PileType::Tableau));
    }

    #[test]
    fn test_run_move_checks_length_and_first_card() {
        let rules = Permissive;
        let a = Card::new_face_up(Rank::new(6), Suit::Spades);
        let b = Card::new_face_up(Rank::new(5), Suit::Hearts);

        assert!(rules.is_run_move_valid(&[&a, &b], PileType::Tableau, None));
        assert!(!rules.is_run_move_valid(&[&a, &b], PileType::Foundation, None));
        assert!(!rules.is_run_move_valid(&[], PileType::Tableau, None));
    }
}

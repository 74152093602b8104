//! Seeded shuffling for deals.
//!
//! One `GameRng` lives for a whole session and every restart draws its
//! deck from the same stream, so a seed fixes the sequence of deals and
//! not just the first one.
//!
//! ```
//! use klondike_engine::core::{Deck, GameRng};
//!
//! let first = Deck::shuffled(&mut GameRng::new(42));
//! let again = Deck::shuffled(&mut GameRng::new(42));
//! assert_eq!(first, again);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// ChaCha8 stream plus a count of the shuffles drawn from it.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    shuffles: u32,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            shuffles: 0,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffles drawn so far; the first deal is shuffle 1.
    #[must_use]
    pub fn shuffles(&self) -> u32 {
        self.shuffles
    }

    /// Shuffle `items` in place, advancing the stream.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
        self.shuffles += 1;
    }

    /// Capture the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            shuffles: self.shuffles,
        }
    }

    /// Resume a stream captured with [`GameRng::state`].
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            shuffles: state.shuffles,
        }
    }
}

/// Where a `GameRng` stands in its stream.
///
/// The ChaCha8 word position restores in constant time however many
/// deals came before.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
    pub shuffles: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> Vec<u8> {
        (0..52).collect()
    }

    #[test]
    fn test_same_seed_same_order() {
        let (mut a, mut b) = (GameRng::new(42), GameRng::new(42));
        let (mut left, mut right) = (ids(), ids());

        for _ in 0..3 {
            a.shuffle(&mut left);
            b.shuffle(&mut right);
            assert_eq!(left, right);
        }
        assert_eq!(a.shuffles(), 3);
    }

    #[test]
    fn test_seed_changes_order() {
        let mut left = ids();
        let mut right = ids();
        GameRng::new(1).shuffle(&mut left);
        GameRng::new(2).shuffle(&mut right);
        assert_ne!(left, right);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut cards = ids();
        GameRng::new(9).shuffle(&mut cards);

        assert_ne!(cards, ids());
        cards.sort_unstable();
        assert_eq!(cards, ids());
    }

    #[test]
    fn test_resume_from_state() {
        let mut rng = GameRng::new(42);
        rng.shuffle(&mut ids());

        let state = rng.state();
        let mut next = ids();
        rng.shuffle(&mut next);

        let mut resumed = GameRng::from_state(&state);
        let mut replay = ids();
        resumed.shuffle(&mut replay);

        assert_eq!(next, replay);
        assert_eq!(resumed.seed(), 42);
        assert_eq!(resumed.shuffles(), 2);
    }

    #[test]
    fn test_state_json() {
        let state = GameRng::new(5).state();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<GameRngState>(&json).unwrap(), state);
    }
}

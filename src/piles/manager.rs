//! Pile manager for card locations and movement.
//!
//! The `PileManager` owns the ordered card list of every pile and the
//! reverse index from card to pile. Both are updated together by every
//! movement method, so "which pile holds this card" is an O(1) lookup
//! that never disagrees with the pile contents.

use std::ops::Index;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::card::CardId;
use crate::core::config::PileConfig;
use crate::core::pile::{Pile, PileId, PileType, PILE_COUNT};

/// Manages card locations across piles.
///
/// ## Usage
///
/// ```
/// use klondike_engine::core::{CardId, GameConfig, PileId};
/// use klondike_engine::piles::PileManager;
///
/// let config = GameConfig::default();
/// let mut manager = PileManager::from_config(&config.piles);
///
/// manager.add_to_pile(CardId(10), PileId::STOCK);
/// manager.add_to_pile(CardId(11), PileId::STOCK);
///
/// assert_eq!(manager.top_card(PileId::STOCK), Some(CardId(11)));
/// assert_eq!(manager.pile_of(CardId(10)), Some(PileId::STOCK));
///
/// manager.move_top(PileId::STOCK, PileId::DISCARD);
/// assert_eq!(manager.pile_of(CardId(11)), Some(PileId::DISCARD));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PileManager {
    /// Piles in table order; `piles[id.index()]` has id `id`.
    piles: Vec<Pile>,

    /// Card locations: card_id -> pile_id
    locations: FxHashMap<CardId, PileId>,
}

impl PileManager {
    /// Create empty piles from their configurations.
    ///
    /// Panics unless there is exactly one config per pile, listed in
    /// pile-id order, each typed as its id's fixed layout slot.
    #[must_use]
    pub fn from_config(configs: &[PileConfig]) -> Self {
        assert_eq!(
            configs.len(),
            PILE_COUNT,
            "Expected {} pile configs, got {}",
            PILE_COUNT,
            configs.len()
        );
        let piles = configs
            .iter()
            .enumerate()
            .map(|(i, c)| {
                assert_eq!(c.id.index(), i, "Pile configs must be in id order");
                assert_eq!(
                    c.id.pile_type(),
                    Some(c.pile_type),
                    "{} configured as {}",
                    c.id,
                    c.pile_type
                );
                Pile::new(c.id, c.pile_type, c.name.clone(), c.gap)
            })
            .collect();

        Self {
            piles,
            locations: FxHashMap::default(),
        }
    }

    /// Get a pile by ID.
    #[must_use]
    pub fn get(&self, id: PileId) -> Option<&Pile> {
        self.piles.get(id.index())
    }

    /// Iterate all piles in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Pile> {
        self.piles.iter()
    }

    /// Iterate the piles of one family, in index order.
    pub fn piles_of_type(&self, pile_type: PileType) -> impl Iterator<Item = &Pile> {
        self.piles.iter().filter(move |p| p.pile_type == pile_type)
    }

    /// Add a card to the top of a pile.
    ///
    /// Panics if the card is already on the table.
    pub fn add_to_pile(&mut self, card: CardId, pile: PileId) {
        if let Some(current) = self.locations.get(&card) {
            panic!("Card {:?} already placed on {}", card, current);
        }

        self.pile_mut(pile).push(card);
        self.locations.insert(card, pile);
    }

    /// Get the pile a card is in.
    #[must_use]
    pub fn pile_of(&self, card: CardId) -> Option<PileId> {
        self.locations.get(&card).copied()
    }

    /// Check if a card is in a specific pile.
    #[must_use]
    pub fn is_in_pile(&self, card: CardId, pile: PileId) -> bool {
        self.locations.get(&card) == Some(&pile)
    }

    /// Position of a card within its pile (0 = bottom).
    #[must_use]
    pub fn position_of(&self, card: CardId) -> Option<usize> {
        let pile = self.pile_of(card)?;
        self[pile].position(card)
    }

    /// Get the top card of a pile.
    #[must_use]
    pub fn top_card(&self, pile: PileId) -> Option<CardId> {
        self.get(pile)?.top()
    }

    /// Get the number of cards in a pile.
    #[must_use]
    pub fn pile_size(&self, pile: PileId) -> usize {
        self.get(pile).map_or(0, Pile::len)
    }

    /// Move the top card of `from` onto `to`.
    ///
    /// Returns the moved card, or `None` if `from` was empty.
    pub fn move_top(&mut self, from: PileId, to: PileId) -> Option<CardId> {
        let card = self.pile_mut(from).pop()?;
        self.pile_mut(to).push(card);
        self.locations.insert(card, to);
        Some(card)
    }

    /// Move the cards of `from` starting at index `at` onto `to`,
    /// preserving their order.
    ///
    /// Returns the moved cards bottom to top. Panics if `at` is past the
    /// end of the pile.
    pub fn move_run(&mut self, from: PileId, at: usize, to: PileId) -> Vec<CardId> {
        let len = self[from].len();
        assert!(at <= len, "Run start {} past end of {} ({} cards)", at, from, len);

        let run = self.pile_mut(from).split_off(at);
        let dest = self.pile_mut(to);
        for &card in &run {
            dest.push(card);
        }
        for &card in &run {
            self.locations.insert(card, to);
        }
        run
    }

    /// Remove every card from every pile.
    pub fn clear(&mut self) {
        for pile in &mut self.piles {
            pile.clear();
        }
        self.locations.clear();
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// Check if the manager tracks a card.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.locations.contains_key(&card)
    }

    fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        match self.piles.get_mut(id.index()) {
            Some(pile) => pile,
            None => panic!("Unknown pile {}", id),
        }
    }
}

impl Index<PileId> for PileManager {
    type Output = Pile;

    fn index(&self, id: PileId) -> &Self::Output {
        match self.get(id) {
            Some(pile) => pile,
            None => panic!("Unknown pile {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;

    fn manager() -> PileManager {
        PileManager::from_config(&GameConfig::default().piles)
    }

    #[test]
    fn test_from_config() {
        let manager = manager();

        assert_eq!(manager.iter().count(), 13);
        assert_eq!(manager.piles_of_type(PileType::Foundation).count(), 4);
        assert_eq!(manager.piles_of_type(PileType::Tableau).count(), 7);
        assert_eq!(manager[PileId::tableau(3)].name, "Tableau 3");
        assert!(manager.get(PileId(13)).is_none());
    }

    #[test]
    #[should_panic(expected = "Expected 13 pile configs")]
    fn test_from_config_rejects_missing_pile() {
        let mut config = GameConfig::default();
        config.piles.pop();
        PileManager::from_config(&config.piles);
    }

    #[test]
    #[should_panic(expected = "Pile(6) configured as Foundation")]
    fn test_from_config_rejects_mistyped_pile() {
        let mut config = GameConfig::default();
        config.piles[PileId::tableau(0).index()].pile_type = PileType::Foundation;
        PileManager::from_config(&config.piles);
    }

    #[test]
    fn test_add_and_locate() {
        let mut manager = manager();
        let pile = PileId::tableau(0);

        manager.add_to_pile(CardId(10), pile);
        manager.add_to_pile(CardId(11), pile);

        assert_eq!(manager.pile_of(CardId(10)), Some(pile));
        assert_eq!(manager.pile_of(CardId(99)), None);
        assert!(manager.is_in_pile(CardId(11), pile));
        assert_eq!(manager.position_of(CardId(11)), Some(1));
        assert_eq!(manager.top_card(pile), Some(CardId(11)));
        assert_eq!(manager.pile_size(pile), 2);
    }

    #[test]
    fn test_move_top() {
        let mut manager = manager();

        manager.add_to_pile(CardId(1), PileId::STOCK);
        manager.add_to_pile(CardId(2), PileId::STOCK);

        assert_eq!(manager.move_top(PileId::STOCK, PileId::DISCARD), Some(CardId(2)));
        assert_eq!(manager.pile_of(CardId(2)), Some(PileId::DISCARD));
        assert_eq!(manager.pile_size(PileId::STOCK), 1);

        assert_eq!(manager.move_top(PileId::STOCK, PileId::DISCARD), Some(CardId(1)));
        assert_eq!(manager.move_top(PileId::STOCK, PileId::DISCARD), None);
        assert_eq!(manager[PileId::DISCARD].cards(), &[CardId(2), CardId(1)]);
    }

    #[test]
    fn test_move_run_preserves_order() {
        let mut manager = manager();
        let from = PileId::tableau(0);
        let to = PileId::tableau(1);

        for i in 0..5 {
            manager.add_to_pile(CardId(i), from);
        }
        manager.add_to_pile(CardId(20), to);

        let run = manager.move_run(from, 2, to);
        assert_eq!(run, vec![CardId(2), CardId(3), CardId(4)]);
        assert_eq!(manager[from].cards(), &[CardId(0), CardId(1)]);
        assert_eq!(manager[to].cards(), &[CardId(20), CardId(2), CardId(3), CardId(4)]);

        for card in run {
            assert_eq!(manager.pile_of(card), Some(to));
        }
        assert_eq!(manager.total_cards(), 6);
    }

    #[test]
    fn test_move_empty_run() {
        let mut manager = manager();
        let from = PileId::tableau(0);
        manager.add_to_pile(CardId(1), from);

        let run = manager.move_run(from, 1, PileId::tableau(1));
        assert!(run.is_empty());
        assert_eq!(manager.pile_size(from), 1);
    }

    #[test]
    #[should_panic(expected = "past end")]
    fn test_move_run_out_of_range() {
        let mut manager = manager();
        manager.move_run(PileId::tableau(0), 1, PileId::tableau(1));
    }

    #[test]
    #[should_panic(expected = "already placed")]
    fn test_duplicate_card_panics() {
        let mut manager = manager();
        manager.add_to_pile(CardId(10), PileId::STOCK);
        manager.add_to_pile(CardId(10), PileId::DISCARD);
    }

    #[test]
    fn test_clear() {
        let mut manager = manager();
        manager.add_to_pile(CardId(1), PileId::STOCK);
        manager.add_to_pile(CardId(2), PileId::tableau(6));

        manager.clear();

        assert_eq!(manager.total_cards(), 0);
        assert!(!manager.contains(CardId(1)));
        assert!(manager.iter().all(Pile::is_empty));
    }
}

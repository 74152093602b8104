//! Game state and the event API.
//!
//! ## GameState
//!
//! Owns everything a running game needs:
//! - Configuration
//! - The table (piles, card locations, face state)
//! - Undo history
//! - RNG for restarts
//! - The rules engine
//!
//! ## Event API
//!
//! The presentation layer resolves geometry and calls:
//! - `card_clicked`: turn the top stock card over
//! - `stock_clicked`: draw, or refill from the discard pile
//! - `drag_started`: which cards a drag picks up
//! - `drag_ended` / `move_card`: validate and commit a drop
//! - `undo`: reverse the last recorded move
//!
//! A rejected request returns `MoveError` and leaves the state untouched.

use log::{debug, info};
use smallvec::{smallvec, SmallVec};

use super::action::{MoveKind, MoveReport};
use super::card::{Card, CardId};
use super::config::GameConfig;
use super::deck::Deck;
use super::error::MoveError;
use super::pile::{Pile, PileId, PileType, TABLEAU_COUNT};
use super::rng::{GameRng, GameRngState};
use crate::moves::{MoveExecutor, StockCycle};
use crate::piles::Table;
use crate::rules::{self, GameResult, KlondikeRules, RulesEngine};
use crate::undo::{apply_reverse, UndoAction, UndoOwner, UndoStack};

/// Cards picked up by a drag, bottom to top.
pub type Run = SmallVec<[CardId; 13]>;

/// A running Klondike game.
#[derive(Clone, Debug)]
pub struct GameState<R: RulesEngine = KlondikeRules> {
    config: GameConfig,
    table: Table,
    undo: UndoStack,
    rng: GameRng,
    rules: R,
}

impl GameState {
    /// Create a game with standard rules and deal a shuffled deck.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rules(config, KlondikeRules)
    }

    /// Resume play from a prepared table, with standard rules and an
    /// empty undo history. Nothing is dealt.
    ///
    /// The table need not hold all 52 cards, which makes this the way to
    /// set up endgame positions.
    #[must_use]
    pub fn from_table(config: GameConfig, table: Table) -> Self {
        Self {
            undo: UndoStack::with_limit(config.undo_limit),
            rng: GameRng::new(config.seed),
            config,
            table,
            rules: KlondikeRules,
        }
    }
}

impl<R: RulesEngine> GameState<R> {
    /// Create a game with custom rules and deal a shuffled deck.
    #[must_use]
    pub fn with_rules(config: GameConfig, rules: R) -> Self {
        let mut state = Self {
            table: Table::new(&config.piles),
            undo: UndoStack::with_limit(config.undo_limit),
            rng: GameRng::new(config.seed),
            config,
            rules,
        };
        state.deal();
        state
    }

    // === Dealing ===

    /// Clear the table and deal a freshly shuffled deck.
    pub fn deal(&mut self) {
        let deck = Deck::shuffled(&mut self.rng);
        self.deal_from(deck);
    }

    /// Clear the table and deal `deck` in order.
    ///
    /// Tableau pile `i` receives the next `i + 1` cards with only the last
    /// one face-up. The remaining 24 cards go to the stock face-down, so
    /// the last card of the deck is the top of the stock. Undo history is
    /// discarded.
    pub fn deal_from(&mut self, deck: Deck) {
        self.table.clear();
        self.undo.clear();

        let mut cards = deck.into_cards().into_iter();
        for i in 0..TABLEAU_COUNT {
            let pile = PileId::tableau(i);
            for (j, mut card) in cards.by_ref().take(i + 1).enumerate() {
                card.face_up = j == i;
                self.table.place(card, pile);
            }
        }
        for mut card in cards {
            card.face_up = false;
            self.table.place(card, PileId::STOCK);
        }
        debug!(
            "Dealt {} cards, {} to the stock",
            self.table.total_cards(),
            self.table.piles().pile_size(PileId::STOCK)
        );
    }

    /// Start a new game: a fresh deck from the RNG stream and empty history.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.deal();
    }

    // === Events ===

    /// Click on a card. Only the top stock card responds: it is turned
    /// over onto the discard pile.
    pub fn card_clicked(&mut self, card: CardId) -> Result<MoveReport, MoveError> {
        let pile = self.locate(card).map_err(Self::rejected)?;
        if pile != PileId::STOCK {
            return Err(Self::rejected(MoveError::NotDraggable(card)));
        }
        if self.table.piles().top_card(PileId::STOCK) != Some(card) {
            return Err(Self::rejected(MoveError::StockNotTop(card)));
        }
        self.draw().ok_or_else(|| Self::rejected(MoveError::StockNotTop(card)))
    }

    /// Click on the stock pile itself.
    ///
    /// Draws if the stock holds cards, otherwise refills it from the
    /// discard pile. Returns `None` when both piles are empty.
    pub fn stock_clicked(&mut self) -> Result<Option<MoveReport>, MoveError> {
        if let Some(report) = self.draw() {
            return Ok(Some(report));
        }
        if !StockCycle::can_refill(&self.table) {
            return Ok(None);
        }

        let moved = StockCycle::refill(&mut self.table);
        let description = "Stock refilled from discard pile.";
        self.undo.record(
            UndoOwner::User,
            UndoAction::StockRefill { count: moved.len() },
            description,
        );

        let mut report = MoveReport::new(MoveKind::Refill, PileId::DISCARD, PileId::STOCK, Vec::new(), description);
        report.flipped = moved.iter().copied().collect();
        report.cards = moved;
        Ok(Some(report))
    }

    /// The cards a drag starting at `card` would pick up.
    pub fn drag_started(&self, card: CardId) -> Result<Run, MoveError> {
        self.pick_up(card).map_err(Self::rejected)
    }

    /// Drop a dragged card onto the first valid pile among `candidates`.
    ///
    /// Candidates are the piles the dragged card overlaps. The card's own
    /// pile is skipped. Families are tried in the configured precedence,
    /// and within a family the first valid candidate wins.
    pub fn drag_ended(&mut self, card: CardId, candidates: &[PileId]) -> Result<MoveReport, MoveError> {
        self.resolve_drop(card, candidates)
            .map(|(run, source, dest)| self.commit(run, source, dest))
            .map_err(Self::rejected)
    }

    /// Move the run starting at `card` onto `dest`.
    pub fn move_card(&mut self, card: CardId, dest: PileId) -> Result<MoveReport, MoveError> {
        self.check_move(card, dest)
            .map(|(run, source)| self.commit(run, source, dest))
            .map_err(Self::rejected)
    }

    /// Whether the run starting at `card` may move onto `dest`.
    #[must_use]
    pub fn can_move(&self, card: CardId, dest: PileId) -> bool {
        self.check_move(card, dest).is_ok()
    }

    /// Reverse the most recent recorded move.
    ///
    /// Returns `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<MoveReport> {
        let entry = self.undo.pop()?;
        let report = apply_reverse(
            &entry.action,
            &mut self.table,
            format!("Undid: {}", entry.description),
        );
        info!("{}", report.description);
        Some(report)
    }

    // === Terminal checks ===

    /// Stock and discard are empty and every tableau card is face-up.
    #[must_use]
    pub fn is_auto_completable(&self) -> bool {
        rules::is_auto_completable(&self.table)
    }

    /// All 52 cards are on the foundations in rank order.
    #[must_use]
    pub fn is_won(&self) -> bool {
        rules::is_won(&self.table)
    }

    #[must_use]
    pub fn is_terminal(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.table)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn undo_stack(&self) -> &UndoStack {
        &self.undo
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        self.table.pile(id)
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.table.card(id)
    }

    #[must_use]
    pub fn pile_of(&self, card: CardId) -> Option<PileId> {
        self.table.piles().pile_of(card)
    }

    #[must_use]
    pub fn top_card(&self, pile: PileId) -> Option<&Card> {
        self.table.top(pile)
    }

    /// Cards of a pile, bottom to top.
    pub fn cards_in(&self, pile: PileId) -> impl Iterator<Item = &Card> + '_ {
        self.table.cards_in(pile)
    }

    // === Internals ===

    fn rejected(err: MoveError) -> MoveError {
        debug!("Rejected: {}", err);
        err
    }

    fn locate(&self, card: CardId) -> Result<PileId, MoveError> {
        self.table.piles().pile_of(card).ok_or(MoveError::UnknownCard(card))
    }

    fn pile_type(&self, pile: PileId) -> Result<PileType, MoveError> {
        self.table
            .pile(pile)
            .map(|p| p.pile_type)
            .ok_or(MoveError::UnknownPile(pile))
    }

    fn pick_up(&self, card: CardId) -> Result<Run, MoveError> {
        let pile = self.locate(card)?;
        let pile_type = self.pile_type(pile)?;
        if pile_type == PileType::Stock {
            return Err(MoveError::NotDraggable(card));
        }
        if !self.table.card_unchecked(card).face_up {
            return Err(MoveError::CardFaceDown(card));
        }

        match pile_type {
            PileType::Tableau => {
                let cards = self.table.piles()[pile].cards();
                let at = self
                    .table
                    .piles()
                    .position_of(card)
                    .ok_or(MoveError::UnknownCard(card))?;
                let run: Run = cards[at..].iter().copied().collect();
                let resolved: SmallVec<[&Card; 13]> =
                    run.iter().map(|id| self.table.card_unchecked(*id)).collect();
                if !rules::is_tableau_run(&resolved) {
                    return Err(MoveError::BrokenRun(card));
                }
                Ok(run)
            }
            _ => {
                if self.table.piles().top_card(pile) != Some(card) {
                    return Err(MoveError::NotDraggable(card));
                }
                Ok(smallvec![card])
            }
        }
    }

    fn check_drop(&self, run: &[CardId], dest: PileId) -> Result<(), MoveError> {
        let dest_type = self.pile_type(dest)?;
        let first = run[0];
        if !self.rules.accepts_run(run.len(), dest_type) {
            return Err(MoveError::RunToFoundation {
                card: first,
                len: run.len(),
            });
        }

        let resolved: SmallVec<[&Card; 13]> =
            run.iter().map(|id| self.table.card_unchecked(*id)).collect();
        if !self
            .rules
            .is_run_move_valid(&resolved, dest_type, self.table.top(dest))
        {
            return Err(MoveError::IllegalDestination { card: first, dest });
        }
        Ok(())
    }

    fn check_move(&self, card: CardId, dest: PileId) -> Result<(Run, PileId), MoveError> {
        let run = self.pick_up(card)?;
        let source = self.locate(card)?;
        if source == dest {
            return Err(MoveError::SamePile(dest));
        }
        self.check_drop(&run, dest)?;
        Ok((run, source))
    }

    fn resolve_drop(&self, card: CardId, candidates: &[PileId]) -> Result<(Run, PileId, PileId), MoveError> {
        let run = self.pick_up(card)?;
        let source = self.locate(card)?;
        if let Some(&unknown) = candidates.iter().find(|p| self.table.pile(**p).is_none()) {
            return Err(MoveError::UnknownPile(unknown));
        }

        for family in self.config.precedence.order() {
            let found = candidates
                .iter()
                .copied()
                .filter(|&p| p != source && self.table.pile(p).map(|p| p.pile_type) == Some(family))
                .find(|&p| self.check_drop(&run, p).is_ok());
            if let Some(dest) = found {
                return Ok((run, source, dest));
            }
        }
        Err(MoveError::NoValidDestination(card))
    }

    /// Describe, apply and record a validated placement.
    fn commit(&mut self, run: Run, source: PileId, dest: PileId) -> MoveReport {
        let first = *self.table.card_unchecked(run[0]);
        let description = match (self.table.top(dest), self.table.pile(dest).map(|p| p.pile_type)) {
            (Some(top), _) => format!("Placed {} to {}.", first, top),
            (None, Some(PileType::Foundation)) => format!("Placed {} to the foundation.", first),
            (None, _) => format!("Placed {} to a new pile.", first),
        };
        let face_up: SmallVec<[bool; 13]> = run
            .iter()
            .map(|id| self.table.card_unchecked(*id).face_up)
            .collect();

        let applied = MoveExecutor::apply(&mut self.table, &run, source, dest);

        let action = if source == PileId::DISCARD {
            UndoAction::DiscardReturn { card: first.id, dest }
        } else {
            UndoAction::PileMove {
                source,
                dest,
                cards: run,
                face_up,
                exposed: applied.exposed,
            }
        };
        self.undo.record(UndoOwner::User, action, description.clone());
        info!("{}", description);

        let mut report = MoveReport::new(MoveKind::Place, source, dest, applied.cards, description);
        if let Some(exposed) = applied.exposed {
            report = report.with_flipped(exposed);
        }
        report
    }

    /// Turn the top stock card over and record it.
    fn draw(&mut self) -> Option<MoveReport> {
        let card = MoveExecutor::draw(&mut self.table)?;
        let description = format!("Placed {} to the waste.", self.table.card_unchecked(card));
        self.undo.record(UndoOwner::User, UndoAction::StockDraw { card }, description.clone());
        info!("{}", description);

        Some(
            MoveReport::new(MoveKind::Draw, PileId::STOCK, PileId::DISCARD, vec![card], description)
                .with_flipped(card),
        )
    }
}

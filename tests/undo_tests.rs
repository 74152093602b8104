//! Undo integration tests.
//!
//! Every move origin (stock, discard, tableau, foundation) plus the stock
//! refill must round-trip: applying a move and undoing it restores the
//! contents, order and face state of every pile.

use proptest::prelude::*;

use klondike_engine::core::{Card, CardId, GameConfig, GameState, MoveKind, PileId, Rank, Suit};
use klondike_engine::moves::StockCycle;
use klondike_engine::piles::Table;
use klondike_engine::undo::{UndoAction, UndoOwner};

type Snapshot = Vec<Vec<(CardId, bool)>>;

fn snapshot(game: &GameState) -> Snapshot {
    PileId::all()
        .map(|p| game.cards_in(p).map(|c| (c.id, c.face_up)).collect())
        .collect()
}

fn up(rank: u8, suit: Suit) -> Card {
    Card::new_face_up(Rank::new(rank), suit)
}

fn down(rank: u8, suit: Suit) -> Card {
    Card::new(Rank::new(rank), suit)
}

fn game_with(cards: &[(Card, PileId)]) -> GameState {
    let config = GameConfig::default();
    let mut table = Table::new(&config.piles);
    for &(card, pile) in cards {
        table.place(card, pile);
    }
    GameState::from_table(config, table)
}

// =============================================================================
// Round trips per origin
// =============================================================================

#[test]
fn test_undo_stock_draw() {
    let eight = down(8, Suit::Hearts);
    let mut game = game_with(&[(down(5, Suit::Clubs), PileId::STOCK), (eight, PileId::STOCK)]);
    let before = snapshot(&game);

    game.card_clicked(eight.id).unwrap();
    assert_eq!(game.pile_of(eight.id), Some(PileId::DISCARD));

    let report = game.undo().unwrap();
    assert_eq!(report.kind, MoveKind::Undo);
    assert_eq!(report.description, "Undid: Placed 8 of Hearts to the waste.");
    assert_eq!(snapshot(&game), before);
    assert!(!game.card(eight.id).unwrap().face_up);
    assert!(game.pile(PileId::DISCARD).unwrap().is_empty());
}

#[test]
fn test_undo_discard_move() {
    let ace = up(1, Suit::Spades);
    let mut game = game_with(&[(down(9, Suit::Hearts), PileId::DISCARD), (ace, PileId::DISCARD)]);
    let before = snapshot(&game);

    game.move_card(ace.id, PileId::foundation(0)).unwrap();
    assert!(matches!(
        game.undo_stack().peek().map(|e| &e.action),
        Some(UndoAction::DiscardReturn { .. })
    ));

    game.undo().unwrap();
    assert_eq!(snapshot(&game), before);
    // Discard cards below are never flipped by a move or its reversal
    assert!(!game.card(CardId::of(Rank::new(9), Suit::Hearts)).unwrap().face_up);
}

#[test]
fn test_undo_tableau_run_rehides_exposed_card() {
    let hidden = down(9, Suit::Diamonds);
    let king = up(13, Suit::Spades);
    let queen = up(12, Suit::Hearts);
    let mut game = game_with(&[
        (hidden, PileId::tableau(0)),
        (king, PileId::tableau(0)),
        (queen, PileId::tableau(0)),
    ]);
    let before = snapshot(&game);

    let report = game.move_card(king.id, PileId::tableau(1)).unwrap();
    assert_eq!(report.cards, vec![king.id, queen.id]);
    assert_eq!(report.flipped.as_slice(), &[hidden.id]);
    assert_eq!(report.description, "Placed King of Spades to a new pile.");
    assert!(game.card(hidden.id).unwrap().face_up);

    game.undo().unwrap();
    assert_eq!(snapshot(&game), before);
}

#[test]
fn test_undo_foundation_move() {
    let two_hearts = up(2, Suit::Hearts);
    let three_clubs = up(3, Suit::Clubs);
    let mut game = game_with(&[
        (up(1, Suit::Hearts), PileId::foundation(0)),
        (two_hearts, PileId::foundation(0)),
        (three_clubs, PileId::tableau(2)),
    ]);
    let before = snapshot(&game);

    let report = game.move_card(two_hearts.id, PileId::tableau(2)).unwrap();
    assert_eq!(report.description, "Placed 2 of Hearts to 3 of Clubs.");
    assert!(report.flipped.is_empty());

    game.undo().unwrap();
    assert_eq!(snapshot(&game), before);
}

#[test]
fn test_undo_refill() {
    let mut game = game_with(&[
        (up(1, Suit::Diamonds), PileId::DISCARD),
        (up(3, Suit::Clubs), PileId::DISCARD),
        (up(7, Suit::Hearts), PileId::DISCARD),
    ]);
    let before = snapshot(&game);

    let report = game.stock_clicked().unwrap().unwrap();
    assert_eq!(report.kind, MoveKind::Refill);

    let undone = game.undo().unwrap();
    assert_eq!(undone.description, "Undid: Stock refilled from discard pile.");
    assert_eq!(snapshot(&game), before);
}

// =============================================================================
// History
// =============================================================================

#[test]
fn test_multi_level_undo() {
    let mut game = GameState::new(GameConfig::new(3));
    let before = snapshot(&game);

    for _ in 0..5 {
        game.stock_clicked().unwrap();
    }
    assert_eq!(game.undo_stack().len(), 5);
    assert_eq!(game.undo_stack().count_by_owner(UndoOwner::User), 5);

    while game.undo().is_some() {}
    assert_eq!(snapshot(&game), before);
}

#[test]
fn test_undo_limit() {
    let mut game = GameState::new(GameConfig::new(3).with_undo_limit(1));

    game.stock_clicked().unwrap();
    game.stock_clicked().unwrap();

    assert!(game.undo().is_some());
    assert!(game.undo().is_none());
    assert_eq!(game.pile(PileId::DISCARD).unwrap().len(), 1);
}

#[test]
fn test_rejected_move_records_nothing() {
    let mut game = game_with(&[(up(4, Suit::Hearts), PileId::tableau(0)), (up(5, Suit::Hearts), PileId::tableau(1))]);
    let before = snapshot(&game);

    assert!(game.move_card(CardId::of(Rank::new(4), Suit::Hearts), PileId::tableau(1)).is_err());
    assert!(game.undo_stack().is_empty());
    assert_eq!(snapshot(&game), before);
}

// =============================================================================
// Refill on any discard pile
// =============================================================================

/// Distinct cards in random order, each with a random face state.
fn discard_pile() -> impl Strategy<Value = Vec<Card>> {
    let ids: Vec<u8> = (0..52).collect();
    (
        prop::sample::subsequence(ids, 0..=52).prop_shuffle(),
        prop::collection::vec(any::<bool>(), 52),
    )
        .prop_map(|(ids, faces)| {
            ids.into_iter()
                .zip(faces)
                .map(|(raw, face_up)| Card { face_up, ..Card::from_id(CardId(raw)) })
                .collect()
        })
}

proptest! {
    #[test]
    fn test_refill_reverses_any_discard(discard in discard_pile()) {
        let config = GameConfig::default();
        let mut table = Table::new(&config.piles);
        for &card in &discard {
            table.place(card, PileId::DISCARD);
        }

        let moved = StockCycle::refill(&mut table);

        let expected: Vec<CardId> = discard.iter().rev().map(|c| c.id).collect();
        prop_assert_eq!(&moved, &expected);
        prop_assert_eq!(table.piles()[PileId::STOCK].cards(), expected.as_slice());
        prop_assert!(table.cards_in(PileId::STOCK).all(|c| !c.face_up));
        prop_assert!(table.piles()[PileId::DISCARD].is_empty());
    }
}

// =============================================================================
// Random play
// =============================================================================

/// Every legal (card, destination) pair, in a fixed order.
fn legal_moves(game: &GameState) -> Vec<(CardId, PileId)> {
    let mut moves = Vec::new();
    for raw in 0..52u8 {
        let card = CardId(raw);
        for dest in PileId::all() {
            if game.can_move(card, dest) {
                moves.push((card, dest));
            }
        }
    }
    moves
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_random_play_undoes_to_deal(seed in any::<u64>(), choices in prop::collection::vec(any::<usize>(), 0..40)) {
        let mut game = GameState::new(GameConfig::new(seed));
        let dealt = snapshot(&game);
        let mut recorded = 0;

        for choice in choices {
            let moves = legal_moves(&game);
            // One extra slot stands for clicking the stock
            let pick = choice % (moves.len() + 1);
            let committed = match moves.get(pick) {
                Some(&(card, dest)) => game.move_card(card, dest).is_ok(),
                None => game.stock_clicked().unwrap().is_some(),
            };
            if committed {
                recorded += 1;
            }
        }
        prop_assert_eq!(game.undo_stack().len(), recorded);

        while game.undo().is_some() {}
        prop_assert_eq!(snapshot(&game), dealt);
    }
}

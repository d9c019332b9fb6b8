//! Round flow test suite
//!
//! Exercises the engine the way a front end drives it:
//! - Selection validation and idempotent deselection
//! - Draw invariants over many seeded rounds
//! - Prize lookups for known combinations
//! - Cheat-mode jackpots
//! - Multi-round games and history records

use keno_core::{
    DRAW_COUNT, DrawResult, GameDrawings, GameMode, GamePhase, KenoEngine, PlayRejection,
    PrizeTable, RoundOutcome, RoundStage, SelectionSet, draw_system_numbers,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

// ═══════════════════════════════════════════════════════════════════════════════
// TEST FIXTURES
// ═══════════════════════════════════════════════════════════════════════════════

fn engine_with(mode: GameMode, drawings: GameDrawings, picks: &[u32]) -> KenoEngine {
    let mut engine = KenoEngine::headless(2024);
    engine.set_mode(mode);
    engine.set_drawings(drawings);
    for &n in picks {
        assert!(engine.select_number(n), "failed to pick {n}");
    }
    engine
}

const TEN_PICKS: [u32; 10] = [4, 11, 19, 23, 38, 45, 50, 61, 72, 80];

// ═══════════════════════════════════════════════════════════════════════════════
// SELECTION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn select_every_board_number_once() {
    for n in 1..=80u32 {
        let mut engine = engine_with(GameMode::TenSpot, GameDrawings::One, &[]);
        assert!(engine.select_number(n));
        assert!(engine.selection().contains(n as u8));
    }
}

#[test]
fn invalid_selections_leave_set_unchanged() {
    let mut engine = engine_with(GameMode::FourSpot, GameDrawings::One, &[5, 6]);
    let before = engine.selection().clone();

    for n in [0, 81, 100, 5, 6] {
        assert!(!engine.select_number(n));
    }
    assert_eq!(engine.selection(), &before);

    engine.select_number(7);
    engine.select_number(8);
    assert!(!engine.select_number(9), "selection is full");
    assert_eq!(engine.selection().len(), 4);
}

#[test]
fn deselect_is_true_once() {
    let mut engine = engine_with(GameMode::FourSpot, GameDrawings::One, &[33]);

    assert!(engine.deselect_number(33));
    assert!(!engine.deselect_number(33));
}

// ═══════════════════════════════════════════════════════════════════════════════
// DRAW
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn draws_are_twenty_distinct_board_numbers() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut selection = SelectionSet::with_capacity(8);
    selection.quick_pick(&mut rng);

    for cheat in [false, true] {
        for _ in 0..500 {
            let draw = draw_system_numbers(&mut rng, cheat, &selection);
            assert_eq!(draw.len(), DRAW_COUNT);
            let mut numbers = draw.numbers().to_vec();
            numbers.dedup();
            assert_eq!(numbers.len(), DRAW_COUNT);
            assert!(numbers.iter().all(|n| (1..=80).contains(n)));

            let matches = draw.match_count(&selection);
            assert!(matches <= 8);
            if cheat {
                assert_eq!(matches, 8);
            }
        }
    }
}

#[test]
fn match_count_never_exceeds_spots() {
    let mut engine = KenoEngine::headless(5);
    for mode in GameMode::ALL {
        engine.set_mode(mode);
        engine.set_drawings(GameDrawings::Four);
        engine.random_select_for_user();

        for outcome in engine.play_game().unwrap() {
            assert!(outcome.match_count <= mode.max_spots());
            assert_eq!(outcome.match_count as usize, outcome.matched_numbers.len());
            assert!(outcome.matched_numbers.iter().all(|&n| outcome.draw.contains(n)));
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PRIZES
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn known_prize_lookups() {
    let table = PrizeTable::standard();

    assert_eq!(table.prize_for(10, 9), 4250);
    assert_eq!(table.prize_for(10, 3), 0);
    assert!(table.is_winning_combo(10, 0));
    assert!(!table.is_winning_combo(4, 1));
}

#[test]
fn four_spot_two_hits_pays_one() {
    let mut selection = SelectionSet::with_capacity(4);
    for n in [3, 7, 12, 40] {
        selection.select(n);
    }
    let draw = DrawResult::from_numbers([
        7, 12, 14, 15, 20, 22, 26, 30, 34, 41, 46, 49, 53, 58, 60, 64, 67, 71, 75, 78,
    ]);

    let outcome =
        RoundOutcome::evaluate(GameMode::FourSpot, &selection, draw, &PrizeTable::standard());

    assert_eq!(outcome.match_count, 2);
    assert_eq!(outcome.prize, 1);
    assert_eq!(outcome.matched_numbers, vec![7, 12]);
}

#[test]
fn cheat_mode_ten_spot_hits_top_prize() {
    let mut engine = engine_with(GameMode::TenSpot, GameDrawings::One, &TEN_PICKS);
    engine.set_cheat_mode(true);

    let (outcome, stages) = engine.start_round_with_stages().unwrap();

    assert!(TEN_PICKS.iter().all(|&n| outcome.draw.contains(n as u8)));
    assert_eq!(outcome.match_count, 10);
    assert_eq!(outcome.prize, 100_000);
    assert!(outcome.is_jackpot);
    assert!(stages.iter().any(|e| e.stage
        == RoundStage::TierReached {
            hits: 10,
            prize: 100_000
        }));
}

// ═══════════════════════════════════════════════════════════════════════════════
// ROUND SEQUENCING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn three_round_game_writes_one_record() {
    let mut engine = engine_with(GameMode::TenSpot, GameDrawings::Three, &TEN_PICKS);
    let mut matches = 0u32;

    for round in 1..=3u8 {
        let outcome = engine.start_round().unwrap();
        assert_eq!(outcome.round, round);
        matches += u32::from(outcome.match_count);

        if round < 3 {
            assert_eq!(engine.phase(), GamePhase::RoundComplete);
            assert!(engine.history().is_empty());
            // Picks stay in play between rounds
            assert_eq!(engine.selection().len(), 10);
        }
    }

    assert_eq!(engine.history().len(), 1);
    let record = engine.history()[0];
    assert_eq!(record.total_rounds, 3);
    assert_eq!(record.total_matches, matches);
    assert_eq!(engine.phase(), GamePhase::GameComplete);
}

#[test]
fn cannot_start_before_ready() {
    let mut engine = engine_with(GameMode::EightSpot, GameDrawings::Two, &[1, 2, 3]);

    assert_eq!(
        engine.start_round().unwrap_err(),
        PlayRejection::IncompleteSelection { remaining: 5 }
    );
    assert_eq!(engine.phase(), GamePhase::AwaitingSelection);
    assert!(engine.history().is_empty());
}

#[test]
fn history_table_lists_each_game() {
    let mut engine = engine_with(GameMode::OneSpot, GameDrawings::Two, &[40]);
    engine.play_game().unwrap();
    engine.play_game().unwrap();

    let table = engine.format_history();
    let rows: Vec<&str> = table.lines().skip(2).collect();

    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with('1'));
    assert!(rows[1].starts_with('2'));
    assert!(rows.iter().all(|r| r.contains('$')));
}

//! Undo/redo cap tests, run under both counter policies.
//!
//! Player 1 takes extra turns on sixes, so one seat can build up a history
//! without the turn passing.

use snakes_ladders::core::{
    BoardConfig, GameConfig, InvalidOperation, PlayerId, RulesConfig, UndoPolicy,
};
use snakes_ladders::game::GameEngine;
use snakes_ladders::history::Move;
use snakes_ladders::GameError;

const P1: PlayerId = PlayerId::new(1);
const POLICIES: [UndoPolicy; 2] = [UndoPolicy::PerGame, UndoPolicy::PerTurn];

fn engine(policy: UndoPolicy) -> GameEngine {
    let config = GameConfig::new(2)
        .with_board(BoardConfig::empty())
        .with_rules(RulesConfig::default().with_undo_policy(policy));
    GameEngine::new_game(config).unwrap()
}

/// Five moves for Player 1: squares 1, 7, 13, 19, 25, still Player 1's turn.
fn five_sixes(engine: &mut GameEngine) {
    for _ in 0..5 {
        engine.apply_roll(6).unwrap();
    }
    assert_eq!(engine.current_seat(), P1);
}

fn position(engine: &GameEngine) -> u8 {
    engine.player(P1).unwrap().position()
}

// ============================================================================
// Within one turn (both policies agree)
// ============================================================================

/// The fourth undo fails even though moves remain on the stack.
#[test]
fn test_undo_cap() {
    for policy in POLICIES {
        let mut engine = engine(policy);
        five_sixes(&mut engine);

        for expected_to in [25, 19, 13] {
            let mv = engine.undo_last_move().unwrap();
            assert_eq!(mv.to, expected_to);
        }
        assert_eq!(position(&engine), 7);
        assert_eq!(engine.player(P1).unwrap().history().len(), 2);

        assert!(!engine.can_undo());
        assert_eq!(
            engine.undo_last_move().unwrap_err(),
            GameError::InvalidOperation(InvalidOperation::UndoUnavailable)
        );
        assert_eq!(position(&engine), 7);
    }
}

/// Recording a new move clears redo but does not refill the undo allowance.
#[test]
fn test_new_move_keeps_undo_count() {
    for policy in POLICIES {
        let mut engine = engine(policy);
        five_sixes(&mut engine);
        for _ in 0..3 {
            engine.undo_last_move().unwrap();
        }
        assert!(engine.can_redo());

        engine.apply_roll(6).unwrap();

        assert!(!engine.can_redo());
        assert!(!engine.can_undo(), "{policy:?}");
        assert_eq!(engine.player(P1).unwrap().history().undo_count(), 3);
    }
}

#[test]
fn test_redo_cap() {
    for policy in POLICIES {
        let mut engine = engine(policy);
        five_sixes(&mut engine);
        for _ in 0..3 {
            engine.undo_last_move().unwrap();
        }

        for expected_to in [13, 19, 25] {
            assert_eq!(engine.redo_last_move().unwrap().to, expected_to);
        }
        assert_eq!(position(&engine), 25);
        assert_eq!(
            engine.redo_last_move().unwrap_err(),
            GameError::InvalidOperation(InvalidOperation::RedoUnavailable)
        );
    }
}

#[test]
fn test_undo_entry_takes_player_off_board() {
    for policy in POLICIES {
        let mut engine = engine(policy);
        engine.apply_roll(6).unwrap();

        assert_eq!(engine.undo_last_move().unwrap(), Move::new(6, 0, 1));
        assert_eq!(position(&engine), 0);
        assert!(engine.board().snapshot().occupied.is_empty());
    }
}

// ============================================================================
// Across turns (policies differ)
// ============================================================================

/// Spend the cap, then pass the turn around and back to Player 1.
fn spend_then_cycle(policy: UndoPolicy) -> GameEngine {
    let mut engine = engine(policy);
    five_sixes(&mut engine);
    for _ in 0..3 {
        engine.undo_last_move().unwrap();
    }
    // Player 1 moves 7 -> 9, Player 2 fails to enter.
    engine.apply_roll(2).unwrap();
    engine.apply_roll(3).unwrap();
    assert_eq!(engine.current_seat(), P1);
    engine
}

#[test]
fn test_per_game_cap_survives_turns() {
    let engine = spend_then_cycle(UndoPolicy::PerGame);

    assert!(!engine.can_undo());
    assert_eq!(engine.player(P1).unwrap().history().undo_count(), 3);
}

#[test]
fn test_per_turn_cap_resets_on_new_turn() {
    let mut engine = spend_then_cycle(UndoPolicy::PerTurn);

    assert!(engine.can_undo());
    assert_eq!(engine.undo_last_move().unwrap(), Move::new(2, 7, 9));
    assert_eq!(position(&engine), 7);
}

/// Restart clears counters under either policy.
#[test]
fn test_restart_resets_counts() {
    for policy in POLICIES {
        let mut engine = engine(policy);
        five_sixes(&mut engine);
        for _ in 0..3 {
            engine.undo_last_move().unwrap();
        }

        engine.restart_game();
        engine.apply_roll(6).unwrap();

        assert!(engine.can_undo());
        assert_eq!(engine.player(P1).unwrap().history().undo_count(), 0);
    }
}

/// Custom caps from the rules are honoured.
#[test]
fn test_configured_limits() {
    let rules = RulesConfig::default().with_limits(1, 0);
    let config = GameConfig::new(2)
        .with_board(BoardConfig::empty())
        .with_rules(rules);
    let mut engine = GameEngine::new_game(config).unwrap();
    five_sixes(&mut engine);

    engine.undo_last_move().unwrap();
    assert!(engine.undo_last_move().is_err());
    assert!(!engine.can_redo());
}

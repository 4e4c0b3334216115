//! Property tests over random roll sequences.

use proptest::prelude::*;
use snakes_ladders::core::{Difficulty, GameConfig, FINAL_SQUARE};
use snakes_ladders::game::GameEngine;

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

proptest! {
    /// Positions stay on the board and match occupancy after every roll.
    #[test]
    fn prop_positions_in_bounds(
        mode in 1usize..=4,
        difficulty in difficulty(),
        rolls in prop::collection::vec(1u8..=6, 0..400),
    ) {
        let config = GameConfig::new(mode).with_difficulty(difficulty);
        let mut engine = GameEngine::new_game(config).unwrap();

        for roll in rolls {
            engine.apply_roll(roll).unwrap();

            for player in engine.players() {
                prop_assert!(player.position() <= FINAL_SQUARE);
                let on_board = engine.board().find_player(player.id());
                prop_assert_eq!(on_board, player.is_on_board().then(|| player.position()));
            }

            if engine.winner().is_some() {
                engine.restart_game();
            }
        }
    }

    /// Seeded games replay identically.
    #[test]
    fn prop_seed_reproducible(seed in any::<u64>(), difficulty in difficulty()) {
        let config = GameConfig::new(2).with_difficulty(difficulty).with_seed(seed);
        let mut a = GameEngine::new_game(config.clone()).unwrap();
        let mut b = GameEngine::new_game(config).unwrap();

        for _ in 0..200 {
            let left = a.roll_for_current_player().unwrap();
            let right = b.roll_for_current_player().unwrap();
            prop_assert_eq!(&left, &right);
            if left.won {
                break;
            }
        }
    }

    /// Undo then redo returns the player to the same square.
    #[test]
    fn prop_undo_redo_restores(rolls in prop::collection::vec(1u8..=6, 1..60)) {
        let mut engine = GameEngine::new_game(GameConfig::new(2)).unwrap();
        for roll in rolls {
            engine.apply_roll(roll).unwrap();
            if engine.winner().is_some() {
                return Ok(());
            }
        }

        let seat = engine.current_seat();
        let before = engine.player(seat).unwrap().position();
        if engine.undo_last_move().is_ok() {
            engine.redo_last_move().unwrap();
            prop_assert_eq!(engine.player(seat).unwrap().position(), before);
            prop_assert_eq!(engine.board().find_player(seat), (before > 0).then_some(before));
        }
    }
}

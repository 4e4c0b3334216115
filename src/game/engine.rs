//! The game engine: turn cycle, roll resolution, undo/redo.
//!
//! ## Turn cycle
//!
//! ```text
//! AwaitingRoll(seat) --roll--> AwaitingRoll(next)   roll != 6
//!                     --roll--> AwaitingRoll(seat)   roll == 6, extra turn
//!                     --roll--> Won(seat)            reached the final square
//! Won(seat) --restart--> AwaitingRoll(Player 1)
//! ```
//!
//! Every operation computes its result first and only then commits it, so a
//! rejected call leaves the engine exactly as it was.

use tracing::{debug, info, instrument};

use super::snapshot::{self, GameSnapshot, PlayerView};
use super::state::{RollOutcome, TurnState};
use crate::board::Board;
use crate::core::{
    ConfigError, Difficulty, GameConfig, GameError, GameRng, GameRngState, IllegalState,
    InvalidOperation, Player, PlayerId, PlayerMap, RulesConfig, UndoPolicy, DIE_FACES,
    EXTRA_TURN_ROLL, MAX_SEATS, MIN_SEATS,
};
use crate::events::{EventBus, EventKind, GameEvent, ListenerId};
use crate::history::Move;
use crate::rules::Advance;

/// Snakes & Ladders game engine.
///
/// ## Usage
///
/// ```
/// use snakes_ladders::core::{GameConfig, PlayerId};
/// use snakes_ladders::game::{GameEngine, TurnState};
///
/// let mut engine = GameEngine::new_game(GameConfig::new(2)).unwrap();
///
/// // Off the board: only a six gets a player onto square 1.
/// let outcome = engine.apply_roll(6).unwrap();
/// assert_eq!(outcome.position(), Some(1));
/// assert!(outcome.extra_turn);
///
/// // 1 + 3 lands on the ladder at 4.
/// let outcome = engine.apply_roll(3).unwrap();
/// assert_eq!(outcome.position(), Some(25));
/// assert_eq!(engine.turn_state(), TurnState::AwaitingRoll(PlayerId::new(2)));
/// ```
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    players: PlayerMap<Player>,
    state: TurnState,
    difficulty: Difficulty,
    mode: usize,
    rules: RulesConfig,
    rng: GameRng,
    last_move: Option<Move>,
    bus: EventBus,
}

impl GameEngine {
    /// Build the board and seat the players.
    ///
    /// `config.mode` human seats are created from `config.seats`; mode 1
    /// adds a computer seat. Player 1 rolls first.
    #[instrument(skip(config), fields(mode = config.mode, difficulty = %config.difficulty))]
    pub fn new_game(config: GameConfig) -> Result<Self, GameError> {
        if !(MIN_SEATS..=MAX_SEATS).contains(&config.mode) {
            return Err(ConfigError::SeatCountOutOfRange {
                count: config.mode,
                min: MIN_SEATS,
                max: MAX_SEATS,
            }
            .into());
        }
        if config.seats.len() != config.mode {
            return Err(ConfigError::SeatConfigMismatch {
                expected: config.mode,
                found: config.seats.len(),
            }
            .into());
        }

        config.rules.validate()?;
        let board = Board::from_config(&config.board)?;
        let rules = config.rules.clone();
        let players = PlayerMap::new(config.seat_count(), |id| {
            match config.seats.get(id.seat()) {
                Some(seat) => Player::human(id, seat, &rules),
                None => Player::computer(id, &rules),
            }
        });

        info!(seats = players.seat_count(), "New game");

        Ok(Self {
            board,
            players,
            state: TurnState::AwaitingRoll(PlayerId::new(1)),
            difficulty: config.difficulty,
            mode: config.mode,
            rules,
            rng: GameRng::new(config.seed),
            last_move: None,
            bus: EventBus::new(),
        })
    }

    // === Turn operations ===

    /// Roll the die for the seat whose turn it is and apply the result.
    ///
    /// Fails with `IllegalState::GameOver` once someone has won; no die is
    /// drawn in that case.
    #[instrument(skip(self))]
    pub fn roll_for_current_player(&mut self) -> Result<RollOutcome, GameError> {
        self.ensure_in_progress()?;
        let roll = self.rng.roll_die();
        Ok(self.resolve(roll))
    }

    /// Apply a roll chosen by the caller, for scripted dice and replays.
    #[instrument(skip(self))]
    pub fn apply_roll(&mut self, roll: u8) -> Result<RollOutcome, GameError> {
        if !(1..=DIE_FACES).contains(&roll) {
            return Err(IllegalState::RollOutOfRange {
                roll,
                faces: DIE_FACES,
            }
            .into());
        }
        self.ensure_in_progress()?;
        Ok(self.resolve(roll))
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.state {
            TurnState::Won(winner) => Err(IllegalState::GameOver { winner }.into()),
            TurnState::AwaitingRoll(_) => Ok(()),
        }
    }

    fn resolve(&mut self, roll: u8) -> RollOutcome {
        let player = self.current_seat();
        let from = self.players[player].position;
        let advance = self
            .difficulty
            .advance(from, roll, self.rules.roll_to_enter);

        let (to, shortcut) = match advance {
            Advance::Step(square) | Advance::Bounce(square) => (
                self.board.resolve_landing(square),
                self.board.shortcut_at(square),
            ),
            other => (other.landing(from), None),
        };
        let won = advance.is_win();
        let extra_turn = !won && roll == EXTRA_TURN_ROLL;
        let mv = (to != from).then(|| Move::new(roll, from, to));

        let mut events = Vec::new();

        // Commit.
        let mover = &mut self.players[player];
        mover.last_roll = roll;
        if let Some(mv) = mv {
            mover.position = to;
            mover.history.record(mv);
            self.board.move_player(player, from, to);
            self.last_move = Some(mv);
            debug!(%player, %mv, ?shortcut, "Move applied");
            events.push(GameEvent::MoveApplied {
                player,
                mv,
                shortcut,
            });
        } else if let Advance::Wasted(reason) = advance {
            debug!(%player, roll, ?reason, "Roll wasted");
            events.push(GameEvent::RollWasted {
                player,
                roll,
                reason,
            });
        } else {
            // A shortcut led back to the starting square: reported, not recorded.
            let mv = Move::new(roll, from, to);
            debug!(%player, %mv, ?shortcut, "Move returned to start");
            events.push(GameEvent::MoveApplied {
                player,
                mv,
                shortcut,
            });
        }

        if won {
            let mover = &mut self.players[player];
            mover.wins += 1;
            let wins = mover.wins;
            self.state = TurnState::Won(player);
            info!(%player, wins, "Player won");
            events.push(GameEvent::PlayerWon { player, wins });
        } else if !extra_turn {
            let next = self.next_seat(player);
            self.state = TurnState::AwaitingRoll(next);
            if self.rules.undo_policy == UndoPolicy::PerTurn {
                self.players[next].history.reset_counts();
            }
            debug!(from = %player, to = %next, "Turn changed");
            events.push(GameEvent::TurnChanged { from: player, to: next });
        }

        self.bus.publish(&events);

        RollOutcome {
            player,
            roll,
            advance,
            mv,
            shortcut,
            won,
            extra_turn,
            events,
        }
    }

    fn next_seat(&self, player: PlayerId) -> PlayerId {
        PlayerId::from_seat((player.seat() + 1) % self.players.seat_count())
    }

    // === Undo / redo ===

    /// Take back the current player's most recent move.
    ///
    /// The player returns to the move's `from` square (0 takes them off the
    /// board). Turn order is unchanged. `last_move` becomes the player's
    /// previous move.
    #[instrument(skip(self))]
    pub fn undo_last_move(&mut self) -> Result<Move, GameError> {
        self.ensure_in_progress()?;
        let player = self.current_seat();
        let mv = self.players[player]
            .history
            .undo()
            .ok_or(InvalidOperation::UndoUnavailable)?;

        self.players[player].position = mv.from;
        self.board.move_player(player, mv.to, mv.from);
        self.last_move = self.players[player].history.last();
        debug!(%player, %mv, "Move undone");

        self.bus.publish(&[GameEvent::MoveUndone { player, mv }]);
        Ok(mv)
    }

    /// Re-apply the current player's most recently undone move.
    #[instrument(skip(self))]
    pub fn redo_last_move(&mut self) -> Result<Move, GameError> {
        self.ensure_in_progress()?;
        let player = self.current_seat();
        let mv = self.players[player]
            .history
            .redo()
            .ok_or(InvalidOperation::RedoUnavailable)?;

        self.players[player].position = mv.to;
        self.board.move_player(player, mv.from, mv.to);
        self.last_move = Some(mv);
        debug!(%player, %mv, "Move redone");

        self.bus.publish(&[GameEvent::MoveRedone { player, mv }]);
        Ok(mv)
    }

    /// Start another game with the same seats. Wins are kept.
    #[instrument(skip(self))]
    pub fn restart_game(&mut self) {
        for player in self.players.values_mut() {
            player.reset_for_new_game();
        }
        self.board.clear_occupants();
        self.state = TurnState::AwaitingRoll(PlayerId::new(1));
        self.last_move = None;
        info!("Game restarted");

        self.bus.publish(&[GameEvent::GameRestarted]);
    }

    // === Queries ===

    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.state
    }

    /// Seat whose turn it is, or the winner once the game is over.
    #[must_use]
    pub fn current_seat(&self) -> PlayerId {
        self.state.seat()
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_seat()]
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    /// Does the computer seat have the next roll?
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        match self.state {
            TurnState::AwaitingRoll(player) => self.players[player].is_computer(),
            TurnState::Won(_) => false,
        }
    }

    /// Players in turn order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.players.seat_count()
    }

    /// Number of human seats.
    #[must_use]
    pub fn mode(&self) -> usize {
        self.mode
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Most recent move still in effect, by any player.
    ///
    /// Undo falls back to the undoing player's previous move (`None` if it
    /// was their first); redo sets it to the redone move.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Can the current player undo? Always false once the game is over.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.state.is_over() && self.current_player().history.can_undo()
    }

    /// Can the current player redo? Always false once the game is over.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.state.is_over() && self.current_player().history.can_redo()
    }

    /// Players by wins, most first; ties keep turn order.
    #[must_use]
    pub fn wins_leaderboard(&self) -> Vec<&Player> {
        snapshot::wins_leaderboard(self.players.values())
    }

    /// Players by position, furthest first; ties keep turn order.
    #[must_use]
    pub fn position_ranking(&self) -> Vec<&Player> {
        snapshot::position_ranking(self.players.values())
    }

    /// Owned view of everything a renderer draws.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.state,
            difficulty: self.difficulty,
            players: self.players.values().map(PlayerView::from).collect(),
            board: self.board.snapshot(),
            last_move: self.last_move,
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    /// Dice state, for reproducing the rest of a session.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue the dice stream from a saved state.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    // === Listeners ===

    /// Receive every event the engine publishes.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> ListenerId {
        self.bus.subscribe(listener)
    }

    /// Receive only the given kinds of event.
    pub fn subscribe_to(
        &mut self,
        kinds: &[EventKind],
        listener: impl FnMut(&GameEvent) + 'static,
    ) -> ListenerId {
        self.bus.subscribe_to(kinds, listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.bus.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Shortcut;
    use crate::core::{BoardConfig, SeatConfig, SeatKind, COMPUTER_NAME, FINAL_SQUARE};
    use crate::rules::WasteReason;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn engine(mode: usize, difficulty: Difficulty) -> GameEngine {
        GameEngine::new_game(GameConfig::new(mode).with_difficulty(difficulty)).unwrap()
    }

    /// Put a player on a square without going through a roll.
    fn place(engine: &mut GameEngine, player: PlayerId, square: u8) {
        let from = engine.players[player].position;
        engine.players[player].position = square;
        engine.board.move_player(player, from, square);
    }

    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);

    #[test]
    fn test_single_player_mode_adds_computer() {
        let engine = engine(1, Difficulty::Medium);

        assert_eq!(engine.seat_count(), 2);
        assert_eq!(engine.mode(), 1);
        let computer = engine.player(P2).unwrap();
        assert_eq!(computer.kind(), SeatKind::Computer);
        assert_eq!(computer.name(), COMPUTER_NAME);
        assert!(!engine.is_computer_turn());
    }

    #[test]
    fn test_seat_count_validation() {
        for mode in [0, 5] {
            let err = GameEngine::new_game(GameConfig::new(mode)).unwrap_err();
            assert!(matches!(
                err,
                GameError::Config(ConfigError::SeatCountOutOfRange { .. })
            ));
        }

        let config = GameConfig::new(3).with_seats(vec![SeatConfig::new("solo")]);
        let err = GameEngine::new_game(config).unwrap_err();
        assert_eq!(
            err,
            GameError::Config(ConfigError::SeatConfigMismatch {
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn test_rules_validation() {
        let rules = RulesConfig {
            roll_to_enter: 0,
            ..RulesConfig::default()
        };
        let err = GameEngine::new_game(GameConfig::new(2).with_rules(rules)).unwrap_err();
        assert_eq!(
            err,
            GameError::Config(ConfigError::InvalidRule {
                rule: "roll_to_enter",
                value: 0
            })
        );

        let rules = RulesConfig::default().with_history_window(0);
        let err = GameEngine::new_game(GameConfig::new(2).with_rules(rules)).unwrap_err();
        assert!(matches!(
            err,
            GameError::Config(ConfigError::InvalidRule {
                rule: "history_window",
                ..
            })
        ));
    }

    #[test]
    fn test_ladder_onto_final_square_rejected() {
        let board = BoardConfig::empty().with_ladder(7, FINAL_SQUARE);
        let err = GameEngine::new_game(GameConfig::new(2).with_board(board)).unwrap_err();
        assert_eq!(
            err,
            GameError::Config(ConfigError::EndsOnFinalSquare { start: 7 })
        );
    }

    #[test]
    fn test_bad_board_rejected() {
        let board = BoardConfig::empty().with_snake(30, 10).with_ladder(30, 50);
        let err = GameEngine::new_game(GameConfig::new(2).with_board(board)).unwrap_err();
        assert_eq!(
            err,
            GameError::Config(ConfigError::AmbiguousRedirect { square: 30 })
        );
    }

    #[test]
    fn test_failed_entry_not_recorded() {
        let mut engine = engine(2, Difficulty::Medium);

        let outcome = engine.apply_roll(3).unwrap();

        assert_eq!(outcome.mv, None);
        assert_eq!(engine.player(P1).unwrap().position(), 0);
        assert_eq!(engine.player(P1).unwrap().last_roll(), 3);
        assert!(engine.player(P1).unwrap().history().is_empty());
        assert_eq!(engine.turn_state(), TurnState::AwaitingRoll(P2));
        assert_eq!(
            outcome.events,
            vec![
                GameEvent::RollWasted {
                    player: P1,
                    roll: 3,
                    reason: WasteReason::NeedsEntryRoll
                },
                GameEvent::TurnChanged { from: P1, to: P2 },
            ]
        );
    }

    #[test]
    fn test_entry_on_six_keeps_turn() {
        let mut engine = engine(2, Difficulty::Medium);

        let outcome = engine.apply_roll(6).unwrap();

        assert_eq!(outcome.mv, Some(Move::new(6, 0, 1)));
        assert!(outcome.extra_turn);
        assert_eq!(engine.current_seat(), P1);
        assert_eq!(engine.board().occupants_of(1), &[P1]);
        assert_eq!(engine.last_move(), Some(Move::new(6, 0, 1)));
    }

    #[test]
    fn test_ladder_and_snake() {
        let mut engine = engine(2, Difficulty::Medium);
        place(&mut engine, P1, 1);

        let outcome = engine.apply_roll(3).unwrap();
        assert_eq!(outcome.mv, Some(Move::new(3, 1, 25)));
        assert_eq!(outcome.shortcut.map(|s| s.end), Some(25));

        place(&mut engine, P2, 16);
        let outcome = engine.apply_roll(4).unwrap();
        assert_eq!(outcome.mv, Some(Move::new(4, 16, 6)));
        assert_eq!(engine.board().occupants_of(6), &[P2]);
        assert!(engine.board().occupants_of(16).is_empty());
    }

    #[test]
    fn test_overshoot_by_difficulty() {
        let mut easy = engine(2, Difficulty::Easy);
        place(&mut easy, P1, 97);
        let outcome = easy.apply_roll(5).unwrap();
        assert!(outcome.won);
        assert_eq!(easy.player(P1).unwrap().position(), FINAL_SQUARE);
        assert_eq!(easy.winner(), Some(P1));

        let mut medium = engine(2, Difficulty::Medium);
        place(&mut medium, P1, 97);
        let outcome = medium.apply_roll(5).unwrap();
        assert!(!outcome.won);
        assert_eq!(outcome.mv, None);
        assert_eq!(medium.player(P1).unwrap().position(), 97);
        assert_eq!(medium.current_seat(), P2);

        let mut hard = engine(2, Difficulty::Hard);
        place(&mut hard, P1, 97);
        let outcome = hard.apply_roll(5).unwrap();
        assert_eq!(outcome.advance, Advance::Bounce(98));
        assert_eq!(hard.player(P1).unwrap().position(), 98);
    }

    #[test]
    fn test_hard_bounce_takes_snake() {
        let mut engine = engine(2, Difficulty::Hard);
        place(&mut engine, P1, 99);

        let outcome = engine.apply_roll(6).unwrap();

        // 99 + 6 bounces to 95, which is a snake to 55.
        assert_eq!(outcome.mv, Some(Move::new(6, 99, 55)));
        assert!(outcome.extra_turn);
    }

    #[test]
    fn test_win_on_six_ends_game() {
        let mut engine = engine(2, Difficulty::Medium);
        place(&mut engine, P1, 94);

        let outcome = engine.apply_roll(6).unwrap();

        assert!(outcome.won);
        assert!(!outcome.extra_turn);
        assert_eq!(engine.turn_state(), TurnState::Won(P1));
        assert_eq!(engine.player(P1).unwrap().wins(), 1);
    }

    #[test]
    fn test_roll_after_win_rejected() {
        let mut engine = engine(2, Difficulty::Easy);
        place(&mut engine, P1, 99);
        engine.apply_roll(1).unwrap();

        let before = engine.rng_state();
        let err = engine.roll_for_current_player().unwrap_err();

        assert_eq!(err, GameError::IllegalState(IllegalState::GameOver { winner: P1 }));
        assert_eq!(engine.rng_state(), before);
        assert!(engine.undo_last_move().is_err());
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_roll_out_of_range() {
        let mut engine = engine(2, Difficulty::Medium);

        for roll in [0, 7] {
            let err = engine.apply_roll(roll).unwrap_err();
            assert_eq!(
                err,
                GameError::IllegalState(IllegalState::RollOutOfRange { roll, faces: 6 })
            );
        }
        assert_eq!(engine.current_seat(), P1);
        assert_eq!(engine.player(P1).unwrap().last_roll(), 0);
    }

    #[test]
    fn test_undo_redo() {
        let mut engine = engine(2, Difficulty::Medium);
        engine.apply_roll(6).unwrap();
        engine.apply_roll(2).unwrap();
        // Player 2 fails to enter; back to Player 1.
        engine.apply_roll(1).unwrap();

        let undone = engine.undo_last_move().unwrap();
        assert_eq!(undone, Move::new(2, 1, 3));
        assert_eq!(engine.player(P1).unwrap().position(), 1);
        assert_eq!(engine.board().occupants_of(1), &[P1]);

        let undone = engine.undo_last_move().unwrap();
        assert_eq!(undone, Move::new(6, 0, 1));
        assert!(!engine.player(P1).unwrap().is_on_board());
        assert_eq!(engine.board().find_player(P1), None);

        let redone = engine.redo_last_move().unwrap();
        assert_eq!(redone, Move::new(6, 0, 1));
        assert_eq!(engine.board().occupants_of(1), &[P1]);
        assert_eq!(engine.current_seat(), P1);
    }

    #[test]
    fn test_shortcut_back_to_start_is_reported() {
        let board = BoardConfig::empty().with_snake(12, 6);
        let mut engine = GameEngine::new_game(GameConfig::new(2).with_board(board)).unwrap();
        place(&mut engine, P1, 6);

        let outcome = engine.apply_roll(6).unwrap();

        assert_eq!(outcome.mv, None);
        assert!(outcome.extra_turn);
        assert_eq!(
            outcome.events,
            vec![GameEvent::MoveApplied {
                player: P1,
                mv: Move::new(6, 6, 6),
                shortcut: Some(Shortcut::new(12, 6)),
            }]
        );
        assert!(engine.player(P1).unwrap().history().is_empty());
        assert_eq!(engine.board().occupants_of(6), &[P1]);
    }

    #[test]
    fn test_last_move_follows_undo_redo() {
        let mut engine = engine(2, Difficulty::Medium);
        engine.apply_roll(6).unwrap();
        engine.apply_roll(6).unwrap();
        assert_eq!(engine.last_move(), Some(Move::new(6, 1, 7)));

        engine.undo_last_move().unwrap();
        assert_eq!(engine.last_move(), Some(Move::new(6, 0, 1)));
        assert_eq!(engine.snapshot().last_move, Some(Move::new(6, 0, 1)));

        engine.undo_last_move().unwrap();
        assert_eq!(engine.last_move(), None);

        engine.redo_last_move().unwrap();
        assert_eq!(engine.last_move(), Some(Move::new(6, 0, 1)));
    }

    #[test]
    fn test_undo_unavailable() {
        let mut engine = engine(2, Difficulty::Medium);

        let err = engine.undo_last_move().unwrap_err();
        assert!(err.is_invalid_operation());
        assert_eq!(
            engine.redo_last_move().unwrap_err(),
            GameError::InvalidOperation(InvalidOperation::RedoUnavailable)
        );
    }

    #[test]
    fn test_per_turn_policy_resets_incoming_counts() {
        let rules = RulesConfig::default().with_undo_policy(UndoPolicy::PerTurn);
        let mut engine = GameEngine::new_game(GameConfig::new(2).with_rules(rules)).unwrap();
        engine.apply_roll(6).unwrap();
        engine.apply_roll(6).unwrap();
        engine.undo_last_move().unwrap();
        assert_eq!(engine.player(P1).unwrap().history().undo_count(), 1);

        // Player 1 rolls 2, Player 2 fails entry, turn comes back to Player 1.
        engine.apply_roll(2).unwrap();
        engine.apply_roll(3).unwrap();

        assert_eq!(engine.player(P1).unwrap().history().undo_count(), 0);
    }

    #[test]
    fn test_restart_keeps_wins() {
        let mut engine = engine(2, Difficulty::Easy);
        place(&mut engine, P2, 40);
        place(&mut engine, P1, 98);
        engine.apply_roll(4).unwrap();

        engine.restart_game();

        assert_eq!(engine.turn_state(), TurnState::AwaitingRoll(P1));
        assert_eq!(engine.last_move(), None);
        assert!(engine.board().snapshot().occupied.is_empty());
        for player in engine.players() {
            assert_eq!(player.position(), 0);
            assert!(player.history().is_empty());
        }
        assert_eq!(engine.player(P1).unwrap().wins(), 1);
        assert_eq!(engine.wins_leaderboard()[0].id(), P1);
    }

    #[test]
    fn test_listeners_see_published_events() {
        let mut engine = engine(2, Difficulty::Medium);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = engine.subscribe(move |e| sink.borrow_mut().push(e.clone()));

        let outcome = engine.apply_roll(6).unwrap();
        engine.restart_game();

        let mut expected = outcome.events;
        expected.push(GameEvent::GameRestarted);
        assert_eq!(*seen.borrow(), expected);

        assert!(engine.unsubscribe(id));
    }

    #[test]
    fn test_computer_turn() {
        let mut engine = engine(1, Difficulty::Medium);
        engine.apply_roll(2).unwrap();

        assert!(engine.is_computer_turn());
        assert!(engine.current_player().is_computer());
    }

    #[test]
    fn test_seeded_rolls_reproducible() {
        let mut a = engine(3, Difficulty::Hard);
        let mut b = engine(3, Difficulty::Hard);

        for _ in 0..50 {
            let ra = a.roll_for_current_player().unwrap();
            let rb = b.roll_for_current_player().unwrap();
            assert_eq!(ra, rb);
            if ra.won {
                break;
            }
        }
    }
}

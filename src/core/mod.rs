//! Core engine types: players, dice, configuration, errors.
//!
//! Everything here is board-agnostic. The board and the turn machine build
//! on these types.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerId, PlayerMap, SeatKind};
pub use rng::{GameRng, GameRngState};
pub use config::{
    BoardConfig, Difficulty, GameConfig, ParseDifficultyError, RulesConfig, SeatConfig,
    UndoPolicy, COMPUTER_NAME, DIE_FACES, EXTRA_TURN_ROLL, FINAL_SQUARE, MAX_SEATS, MIN_SEATS,
    REFERENCE_LADDERS, REFERENCE_SNAKES, SEAT_COLORS,
};
pub use error::{ConfigError, GameError, IllegalState, InvalidOperation};

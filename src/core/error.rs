//! Error types for engine operations.
//!
//! Errors fall into three classes:
//! - `ConfigError`: malformed board tables, rules, or seat setup, rejected at construction
//! - `InvalidOperation`: undo/redo requested with nothing available
//! - `IllegalState`: a roll requested when the game is over, or a bad roll value
//!
//! Every rejected operation leaves the engine untouched.

use derive_more::{Display, Error, From};

use super::player::PlayerId;

/// Malformed configuration detected while building a board or a game.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// A square is the start of both a snake and a ladder.
    #[display("square {square} starts both a snake and a ladder")]
    AmbiguousRedirect { square: u8 },

    /// The same start square appears twice in one table.
    #[display("square {square} is listed twice as a shortcut start")]
    DuplicateStart { square: u8 },

    /// A shortcut endpoint lies outside the board.
    #[display("square {square} is outside the board (1..={max})")]
    SquareOutOfRange { square: u8, max: u8 },

    /// A shortcut that starts and ends on the same square.
    #[display("shortcut on square {square} leads back to itself")]
    DegenerateShortcut { square: u8 },

    /// A ladder that ends on the final square. Wins are decided before
    /// shortcuts apply, so it would strand the player there.
    #[display("ladder on square {start} ends on the final square")]
    EndsOnFinalSquare { start: u8 },

    /// A rule value that makes the game unplayable.
    #[display("rule {rule} = {value} is out of range")]
    InvalidRule { rule: &'static str, value: usize },

    /// Seat count outside the supported range.
    #[display("seat count {count} is outside {min}..={max}")]
    SeatCountOutOfRange { count: usize, min: usize, max: usize },

    /// Number of seat configs does not match the requested seat count.
    #[display("expected {expected} seat configs, found {found}")]
    SeatConfigMismatch { expected: usize, found: usize },
}

/// A request that cannot be honoured right now; nothing was changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum InvalidOperation {
    /// Undo stack is empty or the undo cap is spent.
    #[display("no move available to undo")]
    UndoUnavailable,

    /// Redo stack is empty or the redo cap is spent.
    #[display("no move available to redo")]
    RedoUnavailable,
}

/// Operation rejected because of the engine's current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum IllegalState {
    /// The game has a winner; restart before rolling again.
    #[display("game is over, {winner} has won")]
    GameOver { winner: PlayerId },

    /// A scripted roll outside the die's faces.
    #[display("roll {roll} is not a die face (1..={faces})")]
    RollOutOfRange { roll: u8, faces: u8 },
}

/// Any error returned by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    #[display("configuration error: {_0}")]
    Config(#[error(source)] ConfigError),

    #[display("invalid operation: {_0}")]
    InvalidOperation(#[error(source)] InvalidOperation),

    #[display("illegal state: {_0}")]
    IllegalState(#[error(source)] IllegalState),
}

impl GameError {
    /// True for soft failures the caller can surface as UI feedback.
    #[must_use]
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, GameError::InvalidOperation(_))
    }
}
